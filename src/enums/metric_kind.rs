use crate::common::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    ProcessingTime,
    CreditBalance,
    ApproximateNumberOfMessages,
    ClusterSize,
}

impl MetricKind {
    #[doc = "JSON key under which the series is recorded"]
    pub fn record_key(&self) -> &'static str {
        match self {
            MetricKind::ProcessingTime => "processingTimeRecords",
            MetricKind::CreditBalance => "creditBalanceRecords",
            MetricKind::ApproximateNumberOfMessages => "approximateNumberOfMessagesRecords",
            MetricKind::ClusterSize => "clusterSizeRecords",
        }
    }

    pub fn y_label(&self) -> &'static str {
        match self {
            MetricKind::ProcessingTime => "Processing Time(s)",
            MetricKind::CreditBalance => "CPU Credits",
            MetricKind::ApproximateNumberOfMessages => "Number of Requests",
            MetricKind::ClusterSize => "Cluster Size",
        }
    }

    #[doc = "Cluster size is a node count, so its axis only shows whole numbers"]
    pub fn integer_ticks(&self) -> bool {
        matches!(self, MetricKind::ClusterSize)
    }
}

impl FromStr for MetricKind {
    type Err = anyhow::Error;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "processingTimeRecords" => Ok(MetricKind::ProcessingTime),
            "creditBalanceRecords" => Ok(MetricKind::CreditBalance),
            "approximateNumberOfMessagesRecords" => Ok(MetricKind::ApproximateNumberOfMessages),
            "clusterSizeRecords" => Ok(MetricKind::ClusterSize),
            _ => Err(anyhow!(
                "[MetricKind->from_str] unrecognized record key '{}'",
                key
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_record_key() {
        for kind in [
            MetricKind::ProcessingTime,
            MetricKind::CreditBalance,
            MetricKind::ApproximateNumberOfMessages,
            MetricKind::ClusterSize,
        ] {
            let parsed: MetricKind = kind.record_key().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn unknown_key_is_a_lookup_error() {
        let err = "memoryRecords".parse::<MetricKind>().unwrap_err();
        assert!(err.to_string().contains("unrecognized record key 'memoryRecords'"));
    }

    #[test]
    fn only_cluster_size_uses_integer_ticks() {
        assert!(MetricKind::ClusterSize.integer_ticks());
        assert!(!MetricKind::ProcessingTime.integer_ticks());
        assert_eq!(MetricKind::CreditBalance.y_label(), "CPU Credits");
    }
}
