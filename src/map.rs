// Action to raw-input mapping table

use crate::buttons;
use crate::error::InputError;
use crate::keys;
use log::debug;
use std::collections::{HashMap, HashSet};

/// A physical input identifier: a keyboard code string or a mouse button
/// code. Raw inputs are supplied by the platform layer and used only as
/// map keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RawInput {
    Key(String),
    Button(u8),
}

/// One action bound to a list of human-readable input names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputMapping {
    pub action: String,
    pub inputs: Vec<String>,
}

impl InputMapping {
    pub fn new(
        action: impl Into<String>,
        inputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            action: action.into(),
            inputs: inputs.into_iter().map(Into::into).collect(),
        }
    }
}

/// A mapping resolved against the key/button tables, ready to apply.
struct ResolvedMapping {
    action: String,
    key_codes: Vec<String>,
    button_codes: Vec<u8>,
}

/// Bidirectional many-to-many association between actions and raw inputs.
///
/// Invariant: a raw input appears in an action's forward set exactly when
/// the action appears in that input's reverse set, and an action exists
/// exactly while it has at least one mapped input.
#[derive(Debug, Default)]
pub struct InputMap {
    actions: HashSet<String>,
    action_to_keys: HashMap<String, HashSet<String>>,
    action_to_buttons: HashMap<String, HashSet<u8>>,
    key_to_actions: HashMap<String, HashSet<String>>,
    button_to_actions: HashMap<u8, HashSet<String>>,
}

impl InputMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all currently mapped actions.
    pub fn actions(&self) -> HashSet<String> {
        self.actions.clone()
    }

    /// Returns true if this map has a mapping for the given action.
    pub fn has(&self, action: &str) -> bool {
        self.actions.contains(action)
    }

    /// Returns the mapping for the given action if it exists, with each
    /// bound code rendered as its canonical name. A canonical name shared
    /// by several bound codes (e.g. "os left" for MetaLeft and OSLeft)
    /// appears once.
    pub fn get_mapping(&self, action: &str) -> Option<InputMapping> {
        if !self.actions.contains(action) {
            return None;
        }
        let mut inputs: Vec<String> = Vec::new();
        if let Some(codes) = self.action_to_keys.get(action) {
            for code in codes {
                if let Some(name) = keys::names_for_code(code).first() {
                    let name = (*name).to_string();
                    if !inputs.contains(&name) {
                        inputs.push(name);
                    }
                }
            }
        }
        if let Some(codes) = self.action_to_buttons.get(action) {
            for code in codes {
                if let Some(name) = buttons::names_for_code(*code).first() {
                    let name = (*name).to_string();
                    if !inputs.contains(&name) {
                        inputs.push(name);
                    }
                }
            }
        }
        Some(InputMapping {
            action: action.to_string(),
            inputs,
        })
    }

    /// Returns the union of all actions bound to any of the given input
    /// names. Names that match neither table are ignored; an empty query
    /// is an error.
    pub fn get_actions<'a, I>(&self, inputs: I) -> Result<HashSet<String>, InputError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let inputs: Vec<&str> = inputs.into_iter().collect();
        if inputs.is_empty() {
            return Err(InputError::EmptyQuery);
        }
        let key_codes = keys::codes_for(
            inputs.iter().copied().filter(|i| keys::is_key_name(i)),
        )?;
        let button_codes = buttons::codes_for(
            inputs.iter().copied().filter(|i| buttons::is_button_name(i)),
        )?;
        Ok(self.actions_for_codes(&key_codes, &button_codes))
    }

    /// Returns true if at least one action is bound to this raw input.
    /// Drives the facade's default-suppression decision.
    pub fn has_action_for(&self, input: &RawInput) -> bool {
        match input {
            RawInput::Key(code) => self.key_has_action(code),
            RawInput::Button(code) => self.button_has_action(*code),
        }
    }

    pub(crate) fn key_has_action(&self, code: &str) -> bool {
        self.key_to_actions.get(code).is_some_and(|a| !a.is_empty())
    }

    pub(crate) fn button_has_action(&self, code: u8) -> bool {
        self.button_to_actions
            .get(&code)
            .is_some_and(|a| !a.is_empty())
    }

    pub(crate) fn actions_for_codes(
        &self,
        key_codes: &[String],
        button_codes: &[u8],
    ) -> HashSet<String> {
        let mut results = HashSet::new();
        for code in key_codes {
            if let Some(actions) = self.key_to_actions.get(code) {
                results.extend(actions.iter().cloned());
            }
        }
        for code in button_codes {
            if let Some(actions) = self.button_to_actions.get(code) {
                results.extend(actions.iter().cloned());
            }
        }
        results
    }

    /// Adds the given mappings, unioning inputs into any existing ones.
    ///
    /// Validation is all-or-nothing across the batch: every mapping is
    /// resolved against the key/button tables before any effect is
    /// applied, so a failing mapping leaves the table untouched.
    pub fn add<I>(&mut self, mappings: I) -> Result<(), InputError>
    where
        I: IntoIterator<Item = InputMapping>,
    {
        let resolved = mappings
            .into_iter()
            .map(Self::resolve)
            .collect::<Result<Vec<_>, _>>()?;
        for mapping in resolved {
            self.apply(mapping);
        }
        Ok(())
    }

    /// Removes every mapping for the given actions. Unmapped actions are
    /// skipped.
    pub fn remove<'a, I>(&mut self, actions: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for action in actions {
            if !self.actions.remove(action) {
                continue;
            }
            if let Some(codes) = self.action_to_keys.remove(action) {
                for code in codes {
                    if let Some(acts) = self.key_to_actions.get_mut(&code) {
                        acts.remove(action);
                    }
                }
            }
            if let Some(codes) = self.action_to_buttons.remove(action) {
                for code in codes {
                    if let Some(acts) = self.button_to_actions.get_mut(&code) {
                        acts.remove(action);
                    }
                }
            }
            debug!("removed mapping for action '{action}'");
        }
    }

    /// Replaces the mappings for the given actions (overwrite, not merge).
    /// Like `add`, validation happens before any removal or effect.
    pub fn set<I>(&mut self, mappings: I) -> Result<(), InputError>
    where
        I: IntoIterator<Item = InputMapping>,
    {
        let resolved = mappings
            .into_iter()
            .map(Self::resolve)
            .collect::<Result<Vec<_>, _>>()?;
        self.remove(resolved.iter().map(|m| m.action.as_str()));
        for mapping in resolved {
            self.apply(mapping);
        }
        Ok(())
    }

    fn resolve(mapping: InputMapping) -> Result<ResolvedMapping, InputError> {
        let InputMapping { action, inputs } = mapping;
        if action.is_empty() {
            return Err(InputError::MissingAction);
        }
        if inputs.is_empty() {
            return Err(InputError::NoInputs(action));
        }
        if let Some(bad) = inputs
            .iter()
            .find(|i| !keys::is_key_name(i) && !buttons::is_button_name(i))
        {
            return Err(InputError::UnknownInput {
                action,
                input: bad.clone(),
            });
        }
        // A name can alias both a key and a button ("left" is ArrowLeft
        // and the primary mouse button); it binds both raw inputs.
        let key_codes = keys::codes_for(
            inputs
                .iter()
                .map(String::as_str)
                .filter(|i| keys::is_key_name(i)),
        )?;
        let button_codes = buttons::codes_for(
            inputs
                .iter()
                .map(String::as_str)
                .filter(|i| buttons::is_button_name(i)),
        )?;
        Ok(ResolvedMapping {
            action,
            key_codes,
            button_codes,
        })
    }

    fn apply(&mut self, mapping: ResolvedMapping) {
        let ResolvedMapping {
            action,
            key_codes,
            button_codes,
        } = mapping;
        self.actions.insert(action.clone());
        for code in key_codes {
            self.key_to_actions
                .entry(code.clone())
                .or_default()
                .insert(action.clone());
            self.action_to_keys
                .entry(action.clone())
                .or_default()
                .insert(code);
        }
        for code in button_codes {
            self.button_to_actions
                .entry(code)
                .or_default()
                .insert(action.clone());
            self.action_to_buttons
                .entry(action.clone())
                .or_default()
                .insert(code);
        }
        debug!("mapped action '{action}'");
    }
}
