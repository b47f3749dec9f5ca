pub mod athletes;
pub mod references;
