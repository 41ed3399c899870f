use serde::{Deserialize, Serialize};

/// Login form payload. Never persisted anywhere; only the returned
/// token is written to storage.
#[derive(Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Response of `POST /api/auth/login`. The user object is whatever the
/// backend returns, so it stays an opaque JSON value.
#[derive(Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: serde_json::Value,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CostStatus {
    Pending,
    Approved,
    Rejected,
}

impl CostStatus {
    /// Approve/reject are only offered while the record is still pending.
    /// Both transitions are terminal; the backend is the authority on
    /// whether they are legal.
    pub fn is_pending(&self) -> bool {
        matches!(self, CostStatus::Pending)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CostStatus::Pending => "PENDING",
            CostStatus::Approved => "APPROVED",
            CostStatus::Rejected => "REJECTED",
        }
    }
}

/// An internal expense request awaiting approval.
#[derive(Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostRecord {
    pub id: i64,
    pub service_name: String,
    pub cost_details: String,
    pub status: CostStatus,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct CustomerService {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
}

#[derive(Clone, PartialEq, Serialize)]
pub struct NewCustomerService {
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Raw field values of the "Add New Service" form.
#[derive(Clone, PartialEq, Default)]
pub struct ServiceForm {
    pub name: String,
    pub description: String,
    pub price: String,
}

impl ServiceForm {
    pub fn validate(&self) -> Result<NewCustomerService, String> {
        let name = self.name.trim();
        let description = self.description.trim();
        let price_raw = self.price.trim();

        if name.is_empty() || description.is_empty() || price_raw.is_empty() {
            return Err("Please complete all fields.".to_string());
        }

        let price = price_raw
            .parse::<f64>()
            .map_err(|_| "Price must be a number.".to_string())?;
        if price < 0.0 {
            return Err("Price must not be negative.".to_string());
        }

        Ok(NewCustomerService {
            name: name.to_string(),
            description: description.to_string(),
            price,
        })
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.description.clear();
        self.price.clear();
    }
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct SpendEntry {
    pub date: String,
    pub description: String,
    pub amount: f64,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct ChartPoint {
    pub month: String,
    pub balance: f64,
}

#[derive(Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_balance: f64,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub savings_goal: f64,
    pub chart_data: Vec<ChartPoint>,
}

/// Fixed figures shown when the dashboard endpoint is unreachable and
/// demo fallback is enabled.
pub fn sample_dashboard() -> DashboardSummary {
    DashboardSummary {
        total_balance: 125_000.50,
        monthly_income: 8_500.00,
        monthly_expenses: 3_200.75,
        savings_goal: 150_000.00,
        chart_data: vec![
            ChartPoint { month: "Jan".to_string(), balance: 115_000.0 },
            ChartPoint { month: "Feb".to_string(), balance: 118_000.0 },
            ChartPoint { month: "Mar".to_string(), balance: 121_000.0 },
            ChartPoint { month: "Apr".to_string(), balance: 123_500.0 },
            ChartPoint { month: "May".to_string(), balance: 125_000.0 },
        ],
    }
}

/// Fallback rows for the spend-history table.
pub fn sample_spend_history() -> Vec<SpendEntry> {
    vec![
        SpendEntry {
            date: "2024-07-01".to_string(),
            description: "Groceries".to_string(),
            amount: 75.50,
        },
        SpendEntry {
            date: "2024-07-02".to_string(),
            description: "Gas".to_string(),
            amount: 40.00,
        },
        SpendEntry {
            date: "2024-07-03".to_string(),
            description: "Dinner".to_string(),
            amount: 60.25,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pending_records_accept_actions() {
        assert!(CostStatus::Pending.is_pending());
        assert!(!CostStatus::Approved.is_pending());
        assert!(!CostStatus::Rejected.is_pending());
    }

    #[test]
    fn cost_status_uses_screaming_case_on_the_wire() {
        let record: CostRecord = serde_json::from_str(
            r#"{"id":7,"serviceName":"Cloud Hosting","costDetails":"Monthly invoice","status":"PENDING"}"#,
        )
        .unwrap();
        assert_eq!(record.status, CostStatus::Pending);
        assert_eq!(record.service_name, "Cloud Hosting");
        assert_eq!(record.cost_details, "Monthly invoice");
    }

    #[test]
    fn refreshed_list_reflects_approved_record() {
        // After a successful approve the client re-fetches; the refreshed
        // payload is the only source of the new status.
        let refreshed: Vec<CostRecord> = serde_json::from_str(
            r#"[{"id":7,"serviceName":"Cloud Hosting","costDetails":"Monthly invoice","status":"APPROVED"},
                {"id":8,"serviceName":"Office Lease","costDetails":"Q3 rent","status":"PENDING"}]"#,
        )
        .unwrap();
        let approved = refreshed.iter().find(|c| c.id == 7).unwrap();
        assert_eq!(approved.status, CostStatus::Approved);
        assert!(!approved.status.is_pending());
        assert!(refreshed.iter().find(|c| c.id == 8).unwrap().status.is_pending());
    }

    #[test]
    fn dashboard_fallback_matches_fixed_sample() {
        let sample = sample_dashboard();
        assert_eq!(sample.total_balance, 125_000.50);
        assert_eq!(sample.monthly_income, 8_500.00);
        assert_eq!(sample.monthly_expenses, 3_200.75);
        assert_eq!(sample.savings_goal, 150_000.00);
        assert_eq!(sample.chart_data.len(), 5);
        assert_eq!(sample.chart_data[0].month, "Jan");
        assert_eq!(sample.chart_data[4].balance, 125_000.0);
    }

    #[test]
    fn cost_status_labels_match_the_wire_names() {
        for status in [CostStatus::Pending, CostStatus::Approved, CostStatus::Rejected] {
            let wire = serde_json::to_string(&status).unwrap();
            assert_eq!(wire, format!("\"{}\"", status.label()));
        }
    }

    #[test]
    fn spend_history_fallback_has_three_rows() {
        let rows = sample_spend_history();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].description, "Groceries");
        assert_eq!(rows[2].amount, 60.25);
    }

    #[test]
    fn spend_history_fallback_dates_are_distinct() {
        // The spend-history table keys its rows by date.
        let rows = sample_spend_history();
        for (i, row) in rows.iter().enumerate() {
            for other in &rows[i + 1..] {
                assert_ne!(row.date, other.date);
            }
        }
    }

    #[test]
    fn service_form_rejects_incomplete_input() {
        let form = ServiceForm {
            name: "Premium Support".to_string(),
            description: "".to_string(),
            price: "49.99".to_string(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn service_form_rejects_bad_price() {
        let mut form = ServiceForm {
            name: "Premium Support".to_string(),
            description: "24/7 support line".to_string(),
            price: "free".to_string(),
        };
        assert!(form.validate().is_err());
        form.price = "-5".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn service_form_clears_after_successful_submit() {
        let mut form = ServiceForm {
            name: "Premium Support".to_string(),
            description: "24/7 support line".to_string(),
            price: " 49.99 ".to_string(),
        };
        let new_service = form.validate().unwrap();
        assert_eq!(new_service.price, 49.99);
        form.clear();
        assert!(form.name.is_empty());
        assert!(form.description.is_empty());
        assert!(form.price.is_empty());
    }
}
