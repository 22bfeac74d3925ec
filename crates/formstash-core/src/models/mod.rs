mod data_record;
mod field_value;
mod input_record;

pub use data_record::DataRecord;
pub use field_value::FieldValue;
pub use input_record::{InputRecord, InputType};
