pub mod gantt_layout;
