use crate::model::{Tool, ToolState, ToolType};
use crate::store::DataStore;

/// Tool search filters. `name`, `location`, and `brand` are
/// case-insensitive substring matches; `kind` and `state` are exact.
/// An empty filter returns everything.
#[derive(Debug, Clone, Default)]
pub struct ToolFilter {
    pub name: Option<String>,
    pub kind: Option<ToolType>,
    pub state: Option<ToolState>,
    pub location: Option<String>,
    pub brand: Option<String>,
}

pub fn run<S: DataStore>(store: &S, filter: &ToolFilter) -> Vec<Tool> {
    store
        .load_tools()
        .into_iter()
        .filter(|tool| matches(tool, filter))
        .collect()
}

pub fn by_state<S: DataStore>(store: &S, state: ToolState) -> Vec<Tool> {
    run(
        store,
        &ToolFilter {
            state: Some(state),
            ..Default::default()
        },
    )
}

pub fn available<S: DataStore>(store: &S) -> Vec<Tool> {
    by_state(store, ToolState::Available)
}

fn matches(tool: &Tool, filter: &ToolFilter) -> bool {
    if let Some(name) = filter.name.as_deref() {
        if !tool.name.to_lowercase().contains(&name.to_lowercase()) {
            return false;
        }
    }

    if let Some(kind) = filter.kind {
        if tool.kind != kind {
            return false;
        }
    }

    if let Some(state) = filter.state {
        if tool.state != state {
            return false;
        }
    }

    if let Some(location) = filter.location.as_deref() {
        if !tool.location.to_lowercase().contains(&location.to_lowercase()) {
            return false;
        }
    }

    if let Some(brand) = filter.brand.as_deref() {
        if !tool.brand.to_lowercase().contains(&brand.to_lowercase()) {
            return false;
        }
    }

    true
}
