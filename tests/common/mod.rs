#![allow(dead_code)]

use rand::{CryptoRng, RngCore};

// 按预设序列返回随机数，并记录抽取次数
pub struct ScriptedRng {
    values: Vec<u32>,
    pos: usize,
    pub draws: usize,
}

impl ScriptedRng {
    pub fn new(values: &[u32]) -> Self {
        Self { values: values.to_vec(), pos: 0, draws: 0 }
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        self.draws += 1;
        value
    }

    fn next_u64(&mut self) -> u64 {
        (u64::from(self.next_u32()) << 32) | u64::from(self.next_u32())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

// Test double only.
impl CryptoRng for ScriptedRng {}
