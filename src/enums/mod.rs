pub mod scheduling_policy;
