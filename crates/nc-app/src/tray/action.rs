/// One tray menu item. Each maps onto exactly one composite operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrayAction {
    About,
    TextToClipboard,
    ClipboardToText,
    LoadFromFile,
    SaveToFile,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Item(TrayAction),
    Separator,
}

/// Menu order, top to bottom.
pub const MENU_LAYOUT: &[MenuEntry] = &[
    MenuEntry::Item(TrayAction::About),
    MenuEntry::Separator,
    MenuEntry::Item(TrayAction::TextToClipboard),
    MenuEntry::Item(TrayAction::ClipboardToText),
    MenuEntry::Separator,
    MenuEntry::Item(TrayAction::LoadFromFile),
    MenuEntry::Item(TrayAction::SaveToFile),
    MenuEntry::Separator,
    MenuEntry::Item(TrayAction::Exit),
];

impl TrayAction {
    pub const ALL: [TrayAction; 6] = [
        TrayAction::About,
        TrayAction::TextToClipboard,
        TrayAction::ClipboardToText,
        TrayAction::LoadFromFile,
        TrayAction::SaveToFile,
        TrayAction::Exit,
    ];

    /// Stable menu item id.
    pub fn id(self) -> &'static str {
        match self {
            TrayAction::About => "about",
            TrayAction::TextToClipboard => "base64_to_clipboard",
            TrayAction::ClipboardToText => "clipboard_to_base64",
            TrayAction::LoadFromFile => "load_from_file",
            TrayAction::SaveToFile => "save_to_file",
            TrayAction::Exit => "exit",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrayAction::About => "About...",
            TrayAction::TextToClipboard => "Base64 to Clipboard",
            TrayAction::ClipboardToText => "Clipboard to Base64",
            TrayAction::LoadFromFile => "Load from file...",
            TrayAction::SaveToFile => "Save to file...",
            TrayAction::Exit => "Exit",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.id() == id)
    }
}
