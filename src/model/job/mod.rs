pub mod job_row;
pub mod job_table;
