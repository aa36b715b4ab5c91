use rand::Rng;

const DIGITS: &[u8] = b"0123456789";
const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const UPPER_HEX: &[u8] = b"0123456789ABCDEF";
const LOWER_HEX: &[u8] = b"0123456789abcdef";
const LOWER_BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// The fixed, ordered symbol sets codes are drawn from. All of them are ASCII so a symbol index
/// maps directly onto a single byte and a single `char`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Alphabet {
    /// `0-9`
    Digits,

    /// `A-Z0-9`, uppercase base-36 with the letters first.
    Alphanumeric,

    /// `0-9A-F`
    UpperHex,

    /// `0-9a-f`, used when rendering raw token bytes.
    LowerHex,

    /// `0-9a-z`, the digit ordering of a base-36 number.
    LowerBase36,
}

impl Alphabet {
    pub fn contains(&self, symbol: char) -> bool {
        symbol.is_ascii() && self.symbols().contains(&(symbol as u8))
    }

    /// Draws a single symbol, every position of the alphabet being equally likely. The range
    /// sampling in `rand` is unbiased so no modulo skew leaks into the symbol frequencies.
    pub fn sample(&self, rng: &mut impl Rng) -> char {
        let index = rng.gen_range(0..self.size());
        self.symbol(index)
    }

    /// Panics if `index` is outside of the alphabet, callers derive the index from the alphabet's
    /// own size.
    pub(crate) fn symbol(&self, index: usize) -> char {
        self.symbols()[index] as char
    }

    pub const fn size(&self) -> usize {
        self.symbols().len()
    }

    pub const fn symbols(&self) -> &'static [u8] {
        match self {
            Self::Digits => DIGITS,
            Self::Alphanumeric => ALPHANUMERIC,
            Self::UpperHex => UPPER_HEX,
            Self::LowerHex => LOWER_HEX,
            Self::LowerBase36 => LOWER_BASE36,
        }
    }
}
