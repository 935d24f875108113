use crate::model::job::job_row::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulingPolicy {
    Fcfs,
    Spn,
    Hrrn,
}

impl SchedulingPolicy {
    pub const ALL: [SchedulingPolicy; 3] = [
        SchedulingPolicy::Fcfs,
        SchedulingPolicy::Spn,
        SchedulingPolicy::Hrrn,
    ];

    #[doc = "Start time of `row` under this policy"]
    pub fn start_time(&self, row: &JobRow) -> f64 {
        match self {
            SchedulingPolicy::Fcfs => row.start_fcfs(),
            SchedulingPolicy::Spn => row.start_spn(),
            SchedulingPolicy::Hrrn => row.start_hrrn(),
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            SchedulingPolicy::Fcfs => "FCFS",
            SchedulingPolicy::Spn => "SPN",
            SchedulingPolicy::Hrrn => "HRRN",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SchedulingPolicy::Fcfs => "First Come First Serve",
            SchedulingPolicy::Spn => "Shortest Process Next",
            SchedulingPolicy::Hrrn => "Highest Response Ratio Next",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_matching_start_column() {
        let row = JobRow::new("C".to_string(), 4.0, 4.0, 9.0, 11.0, 13.0);

        assert_eq!(SchedulingPolicy::Fcfs.start_time(&row), 9.0);
        assert_eq!(SchedulingPolicy::Spn.start_time(&row), 11.0);
        assert_eq!(SchedulingPolicy::Hrrn.start_time(&row), 13.0);
    }
}
