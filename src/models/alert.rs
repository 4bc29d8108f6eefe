// Heuristic maintenance recommendations

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlertKind {
    /// VACUUM-style storage reclaim after a high-input day.
    StorageReclaim,
    Backup,
    IndexRebuild,
}

impl AlertKind {
    /// Prefix used in alert ids.
    pub fn slug(self) -> &'static str {
        match self {
            AlertKind::StorageReclaim => "vacuum",
            AlertKind::Backup => "backup",
            AlertKind::IndexRebuild => "index",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AlertKind::StorageReclaim => "Database Vacuum Required",
            AlertKind::Backup => "Scheduled Backup",
            AlertKind::IndexRebuild => "Index Optimization",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AlertKind::StorageReclaim => {
                "VACUUM operation needed to reclaim storage space and update statistics"
            }
            AlertKind::Backup => "Weekly full database backup",
            AlertKind::IndexRebuild => "High CPU usage detected - index rebuilding recommended",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            AlertKind::StorageReclaim | AlertKind::Backup => Severity::Medium,
            AlertKind::IndexRebuild => Severity::High,
        }
    }

    pub fn estimated_duration(self) -> &'static str {
        match self {
            AlertKind::StorageReclaim => "2-4 hours",
            AlertKind::Backup => "1-3 hours",
            AlertKind::IndexRebuild => "30-60 minutes",
        }
    }

    /// Status at generation time; never transitioned afterwards.
    pub fn initial_status(self) -> AlertStatus {
        match self {
            AlertKind::Backup => AlertStatus::Scheduled,
            AlertKind::StorageReclaim | AlertKind::IndexRebuild => AlertStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Pending,
    Scheduled,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceAlert {
    pub id: String,
    pub kind: AlertKind,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    /// Date key of the day that triggered the alert.
    pub triggered_by: String,
    pub scheduled_date: NaiveDate,
    pub estimated_duration: String,
    pub status: AlertStatus,
}

impl MaintenanceAlert {
    pub fn new(kind: AlertKind, triggered_by: &str, scheduled_date: NaiveDate) -> Self {
        Self {
            id: format!("{}-{}", kind.slug(), triggered_by),
            kind,
            title: kind.title().to_string(),
            description: kind.description().to_string(),
            severity: kind.severity(),
            triggered_by: triggered_by.to_string(),
            scheduled_date,
            estimated_duration: kind.estimated_duration().to_string(),
            status: kind.initial_status(),
        }
    }
}
