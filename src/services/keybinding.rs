//! 快捷键：按键 → 命令（支持上下文）

use rustc_hash::FxHashMap;
use tracing::warn;

use crate::core::event::{Key, KeyCode};
use crate::core::Command;
use crate::kernel::FocusTarget;

use super::settings::{parse_keybinding, KeybindingRule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    Global,
    Input,
    List,
}

impl KeybindingContext {
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_ascii_lowercase();
        match v.as_str() {
            "global" => Some(Self::Global),
            "input" | "textfield" | "text_field" => Some(Self::Input),
            "list" | "items" => Some(Self::List),
            _ => None,
        }
    }
}

impl From<FocusTarget> for KeybindingContext {
    fn from(focus: FocusTarget) -> Self {
        match focus {
            FocusTarget::Input => Self::Input,
            FocusTarget::List => Self::List,
        }
    }
}

pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
    input: FxHashMap<Key, Command>,
    list: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            global: default_global_keybindings(),
            input: default_input_keybindings(),
            list: default_list_keybindings(),
        }
    }

    /// Defaults with user rules layered on top. Rules that cannot be parsed
    /// are skipped.
    pub fn from_rules(rules: &[KeybindingRule]) -> Self {
        let mut service = Self::with_defaults();
        for rule in rules {
            service.apply_rule(rule);
        }
        service
    }

    pub fn apply_rule(&mut self, rule: &KeybindingRule) -> bool {
        let Some(key) = parse_keybinding(&rule.key) else {
            warn!(key = %rule.key, "ignoring keybinding: unparsable key");
            return false;
        };

        let context = match rule.context.as_deref() {
            None => KeybindingContext::Global,
            Some(raw) => match KeybindingContext::parse(raw) {
                Some(context) => context,
                None => {
                    warn!(context = %raw, "ignoring keybinding: unknown context");
                    return false;
                }
            },
        };

        if rule.command.trim().is_empty() {
            let _ = self.unbind(context, &key);
            return true;
        }

        match Command::from_name(&rule.command) {
            Some(command) => {
                self.bind(context, key, command);
                true
            }
            None => {
                warn!(command = %rule.command, "ignoring keybinding: unknown command");
                false
            }
        }
    }

    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<Command> {
        let found = match context {
            KeybindingContext::Global => self.global.get(key),
            KeybindingContext::Input => self.input.get(key).or_else(|| self.global.get(key)),
            KeybindingContext::List => self.list.get(key).or_else(|| self.global.get(key)),
        };
        found.copied()
    }

    pub fn bind(&mut self, context: KeybindingContext, key: Key, command: Command) {
        self.map_mut(context).insert(key, command);
    }

    pub fn unbind(&mut self, context: KeybindingContext, key: &Key) -> Option<Command> {
        self.map_mut(context).remove(key)
    }

    fn map_mut(&mut self, context: KeybindingContext) -> &mut FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &mut self.global,
            KeybindingContext::Input => &mut self.input,
            KeybindingContext::List => &mut self.list,
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(8);

    bindings.insert(Key::ctrl(KeyCode::Char('q')), Command::Quit);
    bindings.insert(Key::ctrl(KeyCode::Char('c')), Command::Quit);
    bindings.insert(Key::simple(KeyCode::Esc), Command::Quit);
    bindings.insert(Key::simple(KeyCode::Tab), Command::FocusNext);
    bindings.insert(Key::shift(KeyCode::BackTab), Command::FocusPrev);

    bindings
}

fn default_input_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(8);

    bindings.insert(Key::simple(KeyCode::Enter), Command::AddItem);
    bindings.insert(Key::simple(KeyCode::Backspace), Command::DeleteBackward);
    bindings.insert(Key::simple(KeyCode::Delete), Command::DeleteForward);
    bindings.insert(Key::simple(KeyCode::Left), Command::CursorLeft);
    bindings.insert(Key::simple(KeyCode::Right), Command::CursorRight);
    bindings.insert(Key::simple(KeyCode::Home), Command::CursorLineStart);
    bindings.insert(Key::simple(KeyCode::End), Command::CursorLineEnd);
    bindings.insert(Key::ctrl(KeyCode::Char('u')), Command::ClearInput);

    bindings
}

fn default_list_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(16);

    bindings.insert(Key::simple(KeyCode::Up), Command::SelectPrev);
    bindings.insert(Key::simple(KeyCode::Char('k')), Command::SelectPrev);
    bindings.insert(Key::simple(KeyCode::Down), Command::SelectNext);
    bindings.insert(Key::simple(KeyCode::Char('j')), Command::SelectNext);
    bindings.insert(Key::simple(KeyCode::Home), Command::SelectFirst);
    bindings.insert(Key::simple(KeyCode::Char('g')), Command::SelectFirst);
    bindings.insert(Key::simple(KeyCode::End), Command::SelectLast);
    bindings.insert(Key::shift(KeyCode::Char('g')), Command::SelectLast);
    bindings.insert(Key::simple(KeyCode::Delete), Command::DeleteSelected);
    bindings.insert(Key::simple(KeyCode::Char('d')), Command::DeleteSelected);
    bindings.insert(Key::simple(KeyCode::Char('x')), Command::DeleteSelected);
    bindings.insert(Key::simple(KeyCode::Enter), Command::FocusInput);
    bindings.insert(Key::simple(KeyCode::Char('i')), Command::FocusInput);

    bindings
}

#[cfg(test)]
#[path = "../../tests/unit/services/keybinding.rs"]
mod tests;
