pub mod job_table_repository_impl;
