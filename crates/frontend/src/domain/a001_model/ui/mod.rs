mod model_select;
mod template_list;

pub use model_select::ModelSelect;
pub use template_list::TemplateList;
