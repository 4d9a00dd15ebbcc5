//! Terminal components. Each renders through `Display`.

pub mod alert;
pub mod chat_bubble;
pub mod chat_message;
pub mod citations_list;
pub mod layout;
pub mod metrics_card;
pub mod query_form;
pub mod response_card;
pub mod spinner;
