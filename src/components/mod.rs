mod comment_form;
mod comments;
mod dish;
mod loading;

pub use self::{comment_form::*, comments::*, dish::*, loading::*};
