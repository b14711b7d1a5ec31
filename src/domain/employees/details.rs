//! Concurrent detail lookups.

use std::{collections::BTreeMap, sync::Arc};

use tokio::task::JoinSet;
use tracing::{debug, error};

use crate::{
    domain::employees::{
        EmployeesService,
        records::{EmployeeId, EmployeeRecord},
    },
    translator::ErrorTranslator,
};

/// Fetches every employee in `ids` concurrently.
///
/// Lookups that fail are reported through `translator` and left out of the
/// result, so callers get whatever could be loaded.
pub async fn expand_employees(
    service: Arc<dyn EmployeesService>,
    ids: impl IntoIterator<Item = EmployeeId>,
    translator: &ErrorTranslator,
) -> BTreeMap<EmployeeId, EmployeeRecord> {
    let mut lookups = JoinSet::new();

    for id in ids {
        let service = Arc::clone(&service);

        lookups.spawn(async move { (id, service.get_employee(id).await) });
    }

    let mut expanded = BTreeMap::new();

    while let Some(joined) = lookups.join_next().await {
        match joined {
            Ok((id, Ok(employee))) => {
                expanded.insert(id, employee);
            }
            Ok((id, Err(source))) => {
                let message = translator.translate(&source);

                error!(employee = %id, "failed to load employee details: {message}");
            }
            Err(source) => {
                error!("employee lookup task failed: {source}");
            }
        }
    }

    debug!(loaded = expanded.len(), "expanded employee details");

    expanded
}
