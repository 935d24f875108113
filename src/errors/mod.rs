pub mod chart_error;
