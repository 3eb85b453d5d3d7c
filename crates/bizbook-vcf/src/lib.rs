pub mod error;
pub mod vcf;
