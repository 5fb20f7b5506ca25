mod chat_view;
mod parameters_panel;
mod prompt_input;
mod settings_panel;

pub use chat_view::ChatTranscript;
pub use parameters_panel::ParametersPanel;
pub use prompt_input::PromptInput;
pub use settings_panel::SettingsPanel;
