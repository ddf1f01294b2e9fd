use crate::model::Tool;
use crate::store::DataStore;

pub fn by_id<S: DataStore>(store: &S, id: u64) -> Option<Tool> {
    store.load_tools().into_iter().find(|t| t.id == id)
}
