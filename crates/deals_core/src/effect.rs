use crate::{Generation, PageRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Begin retrieving `request`; completions must echo `generation`.
    StartFetch {
        generation: Generation,
        request: PageRequest,
    },
    /// Stop delivering the result of the retrieval tagged `generation`.
    CancelFetch { generation: Generation },
}
