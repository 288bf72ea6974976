//! Walkthrough driver: enumerates the tiny-curve group, then runs
//! keygen → sign → verify → recover for both signature families on a
//! selected named curve.

use clap::Parser;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

use gost_elliptic::{curves, ecdsa, generate_key, gost, marshal_point, AffinePoint};

#[derive(Parser)]
#[command(about = "Demo of generic Weierstrass ECDSA and GOST signatures")]
struct Args {
    /// Curve name, e.g. secp256k1 or Gost341012512paramSetA.
    #[arg(long, default_value = "secp256k1")]
    curve: String,

    /// Message to sign; hashed here with SHA-256.
    #[arg(long, default_value = "Hello signature!")]
    message: String,
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    // Walk the whole tiny-curve group; the 18th multiple closes at O.
    let tiny = &*curves::TINY_EC;
    let mut acc = AffinePoint::Infinity;
    for i in 1..=18u32 {
        acc = tiny.add(&acc, &tiny.generator()).expect("tiny curve walk");
        match acc.coords() {
            Some((x, y)) => println!("{i:2}G = ({x}, {y})"),
            None => println!("{i:2}G = O"),
        }
    }

    let curve = match curves::by_name(&args.curve) {
        Some(c) => c,
        None => {
            eprintln!("unknown curve: {}", args.curve);
            std::process::exit(1);
        }
    };

    let hash = Sha256::digest(args.message.as_bytes());
    let digest = hash.as_slice();
    println!("curve:   {}", curve.name);
    println!("digest:  {}", hex::encode(digest));

    let key = generate_key(curve, &mut OsRng).expect("key generation");
    println!("public:  {}", hex::encode(marshal_point(curve, &key.public.point)));

    let sig = ecdsa::sign(&key.d, digest, curve, &mut OsRng).expect("ecdsa sign");
    println!("ecdsa:   sig = {}", hex::encode(sig.to_der()));
    println!(
        "ecdsa:   verify = {}",
        ecdsa::verify(digest, &sig, &key.public.point, curve)
    );
    let recovered = ecdsa::recover(digest, &sig, &key.public.point, curve).expect("ecdsa recover");
    println!("ecdsa:   recovered = {}", recovered == Some(key.public.point.clone()));

    let sig = gost::sign(&key.d, digest, curve, &mut OsRng).expect("gost sign");
    println!("gost:    sig = {}", hex::encode(sig.to_der()));
    println!(
        "gost:    verify = {}",
        gost::verify(digest, &sig, &key.public.point, curve)
    );
    let recovered = gost::recover(digest, &sig, &key.public.point, curve).expect("gost recover");
    println!("gost:    recovered = {}", recovered == Some(key.public.point));
}
