mod dialog;

pub use dialog::TauriDialogPort;
