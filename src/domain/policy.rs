// src/domain/policy.rs
//
// Policy listing: backend payload vs rendered grid.
//
// Grid columns (stable shape):
//   External Id | Insured | Type | Line | Status | Premium | [Risk States] | [Sub Plans] | Created
// Risk States and Sub Plans only render for some configurations.

use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::recon::{FieldDiff, Keyed, ListItem, RecordComparator};
use crate::recon::rules::split_list;
use crate::table::RowRecord;

pub const COL_EXTERNAL_ID: &str = "External Id";
pub const COL_INSURED: &str = "Insured";
pub const COL_TYPE: &str = "Type";
pub const COL_LINE: &str = "Line";
pub const COL_STATUS: &str = "Status";
pub const COL_PREMIUM: &str = "Premium";
pub const COL_RISK_STATES: &str = "Risk States";
pub const COL_SUB_PLANS: &str = "Sub Plans";
pub const COL_CREATED: &str = "Created";

/// Columns every policy grid renders.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    COL_EXTERNAL_ID, COL_INSURED, COL_TYPE, COL_LINE, COL_STATUS, COL_PREMIUM, COL_CREATED,
];

pub const TYPE_LABELS: (&str, &str) = ("Commercial", "Personal");
pub const LINE_CODES: [(&str, &str); 2] = [("C", "Commercial"), ("P", "Personal")];
pub const CURRENCY_SYMBOL: &str = "$";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubPlan {
    pub code: String,
    pub name: String,
}

impl ListItem for SubPlan {
    fn natural_key(&self) -> Option<String> {
        let code = self.code.trim();
        (!code.is_empty()).then(|| code.to_string())
    }
    fn describe(&self) -> String {
        format!("{}: {}", self.code.trim(), self.name.trim())
    }
}

/// Backend record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPolicy {
    pub external_id: String,
    pub insured_name: String,
    pub is_commercial: bool,
    pub line_code: String,
    pub status: String,
    /// Raw decimal text, e.g. `"1200.00"`.
    pub premium: String,
    #[serde(default)]
    pub risk_states: Option<Vec<String>>,
    #[serde(default)]
    pub sub_plans: Vec<SubPlan>,
    /// `MM-dd-yyyy HH:mm:ss`
    pub created_at: String,
}

impl Keyed for ApiPolicy {
    fn key(&self, field: &str) -> Option<String> {
        match field {
            COL_EXTERNAL_ID | "externalId" => Some(self.external_id.clone()),
            _ => None,
        }
    }
}

/// Rendered grid row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiPolicy {
    pub external_id: String,
    pub insured: String,
    pub policy_type: String,
    pub line: String,
    pub status: String,
    pub premium: String,
    pub risk_states: Option<Vec<String>>,
    pub sub_plans: Option<Vec<SubPlan>>,
    pub created: String,
}

impl UiPolicy {
    /// Build from an extracted row. Optional columns may be absent.
    pub fn from_row(row: &RowRecord) -> Result<Self, TableError> {
        let req = |col: &str| {
            row.get(col).map(str::to_string).ok_or_else(|| TableError::HeaderNotFound {
                header: col.to_string(),
                available: row.headers().to_vec(),
            })
        };
        Ok(Self {
            external_id: req(COL_EXTERNAL_ID)?,
            insured: req(COL_INSURED)?,
            policy_type: req(COL_TYPE)?,
            line: req(COL_LINE)?,
            status: req(COL_STATUS)?,
            premium: req(COL_PREMIUM)?,
            risk_states: row.get(COL_RISK_STATES).map(|s| split_list(s, ',')),
            sub_plans: row.get(COL_SUB_PLANS).map(parse_sub_plans),
            created: req(COL_CREATED)?,
        })
    }

    pub fn from_rows(rows: &[RowRecord]) -> Result<Vec<Self>, TableError> {
        rows.iter().map(Self::from_row).collect()
    }
}

impl Keyed for UiPolicy {
    fn key(&self, field: &str) -> Option<String> {
        match field {
            COL_EXTERNAL_ID | "externalId" => Some(self.external_id.clone()),
            _ => None,
        }
    }
}

/// `"A1: Basic; B2: Plus"` -> items. Entries without a colon keep an empty name.
pub fn parse_sub_plans(cell: &str) -> Vec<SubPlan> {
    split_list(cell, ';')
        .into_iter()
        .map(|entry| match entry.split_once(':') {
            Some((code, name)) => SubPlan { code: code.trim().to_string(), name: name.trim().to_string() },
            None => SubPlan { code: entry, name: s!() },
        })
        .collect()
}

pub fn render_premium(raw: &str) -> String {
    join!(CURRENCY_SYMBOL, raw.trim())
}

/// Field rules for the policy grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct PolicyComparator;

impl RecordComparator<ApiPolicy, UiPolicy> for PolicyComparator {
    fn compare_fields(&self, a: &ApiPolicy, b: &UiPolicy, d: &mut FieldDiff<'_>) {
        d.direct(COL_EXTERNAL_ID, &a.external_id, &b.external_id);
        d.normalized(COL_INSURED, &a.insured_name, &b.insured);
        d.flag(COL_TYPE, a.is_commercial, TYPE_LABELS, &b.policy_type);
        d.translated(COL_LINE, &a.line_code, &LINE_CODES, &b.line);
        d.direct(COL_STATUS, &a.status, &b.status);
        d.composite(COL_PREMIUM, &a.premium, render_premium, &b.premium);

        // Optional on both sides; only compared when the grid shows the column.
        if let Some(ui_states) = &b.risk_states {
            let api_states = a.risk_states.as_deref().unwrap_or(&[]);
            d.scalar_set(COL_RISK_STATES, api_states, ui_states);
        }
        if let Some(ui_plans) = &b.sub_plans {
            d.object_list(COL_SUB_PLANS, &a.sub_plans, ui_plans);
        }

        d.date(COL_CREATED, &a.created_at, &b.created);
    }
}
