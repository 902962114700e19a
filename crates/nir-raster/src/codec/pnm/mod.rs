//! Netpbm containers: binary PPM input, binary PGM output.

mod reader;
mod tokenizer;
mod writer;

pub use reader::{
    read_ppm, read_ppm_file, read_ppm_with_header, PpmHeader, MAX_SAMPLE_VALUE, PPM_MAGIC,
};
pub use writer::{pgm_header_len, write_pgm, PGM_MAXVAL};
