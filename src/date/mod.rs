pub mod record;

pub use record::Date;
