// Chat: FAQ lookup and the ordered rule list that turns a message into a reply.

pub mod faq;
pub mod handlers;
pub mod rules;
