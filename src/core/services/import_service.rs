//! Bulk transaction import from delimited text.
//!
//! Parsing is a naive comma split: quoting and embedded commas are not
//! supported, so a field containing a literal comma will misparse.

use chrono::{NaiveDate, NaiveTime};
use strsim::levenshtein;
use tracing::{info, warn};
use uuid::Uuid;

use crate::currency::parse_amount;
use crate::domain::{EntryKind, FinancialCategory, FinancialTransaction};
use crate::storage::RecordStore;

use super::{ServiceError, ServiceResult};

/// Expected header line of the import file.
pub const CSV_HEADER: &str = "data,descricao,valor,tipo,categoria";

const KIND_INCOME: &str = "receita";
const KIND_EXPENSE: &str = "despesa";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// One parsed row awaiting a category assignment before the batch can commit.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftTransaction {
    /// 1-based line number in the source text.
    pub line: usize,
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub kind: EntryKind,
    pub category_hint: Option<String>,
    /// Auto-resolved category, if the hint matched one.
    pub category_id: Option<Uuid>,
    /// Closest known category name when nothing matched outright.
    pub suggestion: Option<String>,
}

pub struct CsvImporter;

impl CsvImporter {
    /// Parses the raw text into draft rows, auto-resolving category hints
    /// against the tenant's known categories.
    pub fn parse(
        raw: &str,
        categories: &[FinancialCategory],
    ) -> ServiceResult<Vec<DraftTransaction>> {
        let mut drafts = Vec::new();
        for (index, line) in raw.lines().enumerate() {
            if index == 0 {
                // Header row.
                continue;
            }
            let line_no = index + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let fields: Vec<&str> = trimmed.split(',').collect();
            if fields.len() < 4 {
                return Err(ServiceError::Validation(format!(
                    "line {line_no}: expected `{CSV_HEADER}`"
                )));
            }
            let date = NaiveDate::parse_from_str(fields[0].trim(), DATE_FORMAT).map_err(|_| {
                ServiceError::Validation(format!(
                    "line {line_no}: `{}` is not a date",
                    fields[0].trim()
                ))
            })?;
            let description = fields[1].trim().to_string();
            let amount = parse_amount(fields[2]).ok_or_else(|| ServiceError::MalformedAmount {
                line: line_no,
                value: fields[2].trim().to_string(),
            })?;
            let kind = match fields[3].trim() {
                KIND_INCOME => EntryKind::Income,
                KIND_EXPENSE => EntryKind::Expense,
                other => {
                    return Err(ServiceError::Validation(format!(
                        "line {line_no}: unknown kind `{other}`"
                    )))
                }
            };
            let category_hint = fields
                .get(4)
                .map(|hint| hint.trim())
                .filter(|hint| !hint.is_empty())
                .map(str::to_string);

            let category_id = category_hint
                .as_deref()
                .and_then(|hint| match_category(categories, hint));
            let suggestion = match category_id {
                Some(_) => None,
                None => category_hint
                    .as_deref()
                    .and_then(|hint| closest_category(categories, hint)),
            };

            drafts.push(DraftTransaction {
                line: line_no,
                date,
                description,
                amount,
                kind,
                category_hint,
                category_id,
                suggestion,
            });
        }
        Ok(drafts)
    }

    /// Manually assigns a category to one draft row.
    pub fn assign_category(draft: &mut DraftTransaction, category_id: Uuid) {
        draft.category_id = Some(category_id);
        draft.suggestion = None;
    }

    /// Converts a fully resolved batch into transactions dated at midnight of
    /// each parsed date. Nothing is produced unless every row carries a
    /// category.
    pub fn commit(
        drafts: &[DraftTransaction],
        tenant: Uuid,
    ) -> ServiceResult<Vec<FinancialTransaction>> {
        let unresolved: Vec<usize> = drafts
            .iter()
            .filter(|draft| draft.category_id.is_none())
            .map(|draft| draft.line)
            .collect();
        if !unresolved.is_empty() {
            warn!(rows = unresolved.len(), "import blocked by unresolved categories");
            return Err(ServiceError::UnresolvedCategory { rows: unresolved });
        }
        Ok(drafts
            .iter()
            .map(|draft| {
                let mut txn = FinancialTransaction::new(
                    tenant,
                    draft.description.clone(),
                    draft.amount,
                    draft.kind,
                    draft.date.and_time(NaiveTime::MIN),
                );
                txn.category_id = draft.category_id;
                txn
            })
            .collect())
    }

    /// Resolves and persists the whole batch through the store in one shot.
    pub fn import(
        store: &mut dyn RecordStore,
        tenant: Uuid,
        drafts: &[DraftTransaction],
    ) -> ServiceResult<usize> {
        let batch = Self::commit(drafts, tenant)?;
        let count = batch.len();
        store.insert_transactions(batch)?;
        info!(rows = count, "imported transactions");
        Ok(count)
    }
}

/// First category whose name contains the hint or is contained by it,
/// case-insensitively, in collection order.
fn match_category(categories: &[FinancialCategory], hint: &str) -> Option<Uuid> {
    let needle = hint.to_lowercase();
    categories
        .iter()
        .find(|category| {
            let name = category.name.to_lowercase();
            name.contains(&needle) || needle.contains(&name)
        })
        .map(|category| category.id)
}

/// Levenshtein-closest category name for a hint nothing matched, provided the
/// distance stays within half the longer string.
fn closest_category(categories: &[FinancialCategory], hint: &str) -> Option<String> {
    let needle = hint.to_lowercase();
    categories
        .iter()
        .map(|category| {
            (
                levenshtein(&needle, &category.name.to_lowercase()),
                &category.name,
            )
        })
        .filter(|(distance, name)| *distance <= name.len().max(needle.len()) / 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, name)| name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(tenant: Uuid) -> Vec<FinancialCategory> {
        vec![
            FinancialCategory::new(tenant, "Materiais", EntryKind::Expense, "#EF4444"),
            FinancialCategory::new(tenant, "Servicos", EntryKind::Income, "#10B981"),
        ]
    }

    #[test]
    fn parses_the_documented_example_row() {
        let tenant = Uuid::new_v4();
        let known = categories(tenant);
        let raw = format!("{CSV_HEADER}\n2024-02-08,Compra de cordas,150.00,despesa,Materiais\n");
        let drafts = CsvImporter::parse(&raw, &known).unwrap();
        assert_eq!(drafts.len(), 1);
        let draft = &drafts[0];
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2024, 2, 8).unwrap());
        assert_eq!(draft.description, "Compra de cordas");
        assert_eq!(draft.amount, 150.0);
        assert_eq!(draft.kind, EntryKind::Expense);
        assert_eq!(draft.category_id, Some(known[0].id));
    }

    #[test]
    fn malformed_amount_fails_the_row() {
        let tenant = Uuid::new_v4();
        let known = categories(tenant);
        let raw = format!("{CSV_HEADER}\n2024-02-08,Compra de cordas,R$ abc,despesa,Materiais\n");
        let err = CsvImporter::parse(&raw, &known).expect_err("amount must not parse");
        assert!(matches!(
            err,
            ServiceError::MalformedAmount { line: 2, .. }
        ));
    }

    #[test]
    fn hint_matches_in_both_directions() {
        let tenant = Uuid::new_v4();
        let known = categories(tenant);
        // Hint contained in the category name.
        assert_eq!(match_category(&known, "materia"), Some(known[0].id));
        // Category name contained in the hint.
        assert_eq!(
            match_category(&known, "materiais de luthieria"),
            Some(known[0].id)
        );
        assert_eq!(match_category(&known, "impostos"), None);
    }

    #[test]
    fn unmatched_hint_carries_a_suggestion() {
        let tenant = Uuid::new_v4();
        let known = categories(tenant);
        let raw = format!("{CSV_HEADER}\n2024-02-08,Cordas,150.00,despesa,Matteriais\n");
        let drafts = CsvImporter::parse(&raw, &known).unwrap();
        assert_eq!(drafts[0].category_id, None);
        assert_eq!(drafts[0].suggestion.as_deref(), Some("Materiais"));
    }

    #[test]
    fn commit_requires_every_row_resolved() {
        let tenant = Uuid::new_v4();
        let known = categories(tenant);
        let raw = format!(
            "{CSV_HEADER}\n2024-02-08,Cordas,150.00,despesa,Materiais\n2024-02-09,Doacao,80.00,receita,\n"
        );
        let drafts = CsvImporter::parse(&raw, &known).unwrap();
        let err = CsvImporter::commit(&drafts, tenant).expect_err("unresolved row must block");
        assert!(matches!(
            err,
            ServiceError::UnresolvedCategory { ref rows } if rows == &vec![3]
        ));
    }

    #[test]
    fn committed_rows_are_dated_at_midnight() {
        let tenant = Uuid::new_v4();
        let known = categories(tenant);
        let raw = format!("{CSV_HEADER}\n2024-02-08,Cordas,150.00,despesa,Materiais\n");
        let drafts = CsvImporter::parse(&raw, &known).unwrap();
        let batch = CsvImporter::commit(&drafts, tenant).unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(
            batch[0].date,
            NaiveDate::from_ymd_opt(2024, 2, 8)
                .unwrap()
                .and_time(NaiveTime::MIN)
        );
        assert_eq!(batch[0].user_id, tenant);
    }
}
