use crate::common::*;

use crate::enums::scheduling_policy::*;
use crate::model::job::job_row::*;

#[doc = r#"
    정책 하나에 대한 차트 설정.
    어떤 시작 시각 컬럼을 막대의 시작점으로 쓸지(policy)와 차트 제목을 가진다.
    출력 파일명은 제목에서 결정적으로 만들어진다.
"#]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct ChartSpec {
    policy: SchedulingPolicy,
    title: String,
}

impl ChartSpec {
    pub fn for_policy(policy: SchedulingPolicy) -> Self {
        ChartSpec::new(policy, policy.title().to_string())
    }

    #[doc = "The three fixed charts, in rendering order: FCFS, SPN, HRRN"]
    pub fn defaults() -> Vec<ChartSpec> {
        SchedulingPolicy::ALL
            .iter()
            .map(|policy| ChartSpec::for_policy(*policy))
            .collect()
    }

    pub fn begin_time(&self, row: &JobRow) -> f64 {
        self.policy.start_time(row)
    }

    pub fn file_name(&self) -> String {
        format!("{}.png", title_slug(&self.title))
    }
}

#[doc = "\"First Come First Serve\" -> \"first_come_first_serve\""]
pub fn title_slug(title: &str) -> String {
    title.replace(' ', "_").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_follow_titles() {
        let names: Vec<String> = ChartSpec::defaults()
            .iter()
            .map(|spec| spec.file_name())
            .collect();

        assert_eq!(
            names,
            vec![
                "first_come_first_serve.png",
                "shortest_process_next.png",
                "highest_response_ratio_next.png",
            ]
        );
    }

    #[test]
    fn defaults_are_in_policy_order() {
        let policies: Vec<SchedulingPolicy> = ChartSpec::defaults()
            .iter()
            .map(|spec| *spec.policy())
            .collect();

        assert_eq!(policies, SchedulingPolicy::ALL.to_vec());
    }

    #[test]
    fn slug_is_deterministic() {
        assert_eq!(title_slug("Highest Response Ratio Next"), "highest_response_ratio_next");
        assert_eq!(title_slug("Shortest Process Next"), "shortest_process_next");
    }
}
