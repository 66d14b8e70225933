//! Common tools

/// Simple bit ops
pub trait BitOps {
    #[allow(missing_docs)]
    fn set_bit(&mut self, pos: u8) -> Self;
    #[allow(missing_docs)]
    fn clear_bit(&mut self, pos: u8) -> Self;
    #[allow(missing_docs)]
    fn check_bit(&self, pos: u8) -> bool;
}

impl BitOps for u8 {
    fn set_bit(&mut self, pos: u8) -> Self {
        assert!(pos <= 7, "bit offset larger than 7");
        *self |= 1u8 << pos;
        *self
    }

    fn clear_bit(&mut self, pos: u8) -> Self {
        assert!(pos <= 7, "bit offset larger than 7");
        *self &= !(1u8 << pos);
        *self
    }

    fn check_bit(&self, pos: u8) -> bool {
        assert!(pos <= 7, "bit offset larger than 7");
        (*self >> pos) & 1 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_ops_touch_only_the_named_position() {
        let mut byte = 0b0100_0000u8;

        byte.set_bit(0);
        assert_eq!(byte, 0b0100_0001);

        byte.clear_bit(6);
        assert_eq!(byte, 0b0000_0001);

        assert!(byte.check_bit(0));
        assert!(!byte.check_bit(7));
    }
}
