pub mod builders;

#[allow(unused_imports)]
pub use builders::{flags_word, pointer_chain, MessageBuilder, MessageEncoder};
