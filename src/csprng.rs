use aes::Aes256;
use ctr::cipher::{KeyIvInit, StreamCipher};
use ctr::Ctr128BE;
use dashu::integer::UBig;
use rand::RngCore;
use sha2::{Digest, Sha512};

type Aes256Ctr = Ctr128BE<Aes256>;

/// Fixed IV of the entropy-mixed signing stream. Not secret.
const AES_IV: &[u8; 16] = b"IV for ECDSA CTR";

/// Byte source that always produces zeros.
///
/// The CSPRNG xors the AES-CTR keystream over this stream, so what comes
/// out is the keystream itself. Also handy in tests that want the
/// worst-case reader.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroReader;

impl RngCore for ZeroReader {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        dest.fill(0);
        Ok(())
    }
}

/// ### Entropy-Mixed Nonce Stream
///
/// Deterministic CSPRNG for the standards-compatible ECDSA signing path:
/// the AES-256 key is `SHA-512(d ‖ entropy ‖ digest)[..32]`, the stream is
/// AES-CTR under the fixed IV `"IV for ECDSA CTR"` xored over the zero
/// reader. Identical `(d, entropy, digest)` triples replay the same nonce
/// sequence.
pub struct AesCtrRng {
    zero: ZeroReader,
    stream: Aes256Ctr,
}

impl AesCtrRng {
    pub fn new(d: &UBig, entropy: &[u8; 32], digest: &[u8]) -> Self {
        let mut md = Sha512::new();
        md.update(d.to_be_bytes());
        md.update(entropy);
        md.update(digest);
        let block = md.finalize();

        let mut key = [0u8; 32];
        key.copy_from_slice(&block[..32]);

        AesCtrRng {
            zero: ZeroReader,
            stream: Aes256Ctr::new((&key).into(), AES_IV.into()),
        }
    }
}

impl RngCore for AesCtrRng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_be_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_be_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.zero.fill_bytes(dest);
        self.stream.apply_keystream(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
