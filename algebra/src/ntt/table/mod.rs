mod fft;
mod goldilocks;

pub use fft::ComplexFftTable;
pub use goldilocks::GoldilocksNttTable;
