use crate::model::Tool;
use crate::store::DataStore;

/// Full reload on every call; there is no cross-operation cache.
pub fn run<S: DataStore>(store: &S) -> Vec<Tool> {
    store.load_tools()
}
