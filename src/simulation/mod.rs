pub mod colony;

pub use colony::Colony;
