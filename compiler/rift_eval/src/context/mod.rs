//! Scope chain for variable lookup.
//!
//! Scopes live in an arena owned by the context and refer to their parent
//! by [`ScopeId`]. A scope's bindings are fixed when it is created with
//! [`EvaluatorContext::child`]; [`EvaluatorContext::set`] can only replace
//! a value some scope on the chain already owns.

use rustc_hash::FxHashMap;
use serde_json::Value;

/// Handle to a scope in an [`EvaluatorContext`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScopeId(u32);

impl ScopeId {
    /// The scope holding the initial data.
    pub const ROOT: ScopeId = ScopeId(0);

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, Default)]
struct Scope {
    bindings: FxHashMap<String, Value>,
    parent: Option<ScopeId>,
}

#[derive(Clone, Debug)]
pub struct EvaluatorContext {
    scopes: Vec<Scope>,
}

impl EvaluatorContext {
    /// A context whose root scope holds `bindings`.
    pub fn new(bindings: impl IntoIterator<Item = (String, Value)>) -> Self {
        EvaluatorContext {
            scopes: vec![Scope {
                bindings: bindings.into_iter().collect(),
                parent: None,
            }],
        }
    }

    /// Root scope from a data object. Keys of an object become variables;
    /// any other value yields an empty root scope.
    pub fn from_data(data: &Value) -> Self {
        match data {
            Value::Object(map) => {
                EvaluatorContext::new(map.iter().map(|(k, v)| (k.clone(), v.clone())))
            }
            _ => EvaluatorContext::new([]),
        }
    }

    /// Resolve `key` in `scope`, then in each ancestor.
    pub fn get(&self, scope: ScopeId, key: &str) -> Option<&Value> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let scope = &self.scopes[id.index()];
            if let Some(value) = scope.bindings.get(key) {
                return Some(value);
            }
            current = scope.parent;
        }
        None
    }

    pub fn has(&self, scope: ScopeId, key: &str) -> bool {
        self.get(scope, key).is_some()
    }

    /// Overwrite `key` in the nearest scope that owns it.
    ///
    /// Returns `false`, and changes nothing, when no scope on the chain
    /// owns `key`. New bindings are only introduced by [`child`](Self::child).
    pub fn set(&mut self, scope: ScopeId, key: &str, value: Value) -> bool {
        let mut current = Some(scope);
        while let Some(id) = current {
            let scope = &mut self.scopes[id.index()];
            if let Some(slot) = scope.bindings.get_mut(key) {
                *slot = value;
                return true;
            }
            current = scope.parent;
        }
        false
    }

    /// Create a scope under `parent` holding `bindings`.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "scope count is bounded by loop nesting times iterations in flight"
    )]
    pub fn child(
        &mut self,
        parent: ScopeId,
        bindings: impl IntoIterator<Item = (String, Value)>,
    ) -> ScopeId {
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(Scope {
            bindings: bindings.into_iter().collect(),
            parent: Some(parent),
        });
        id
    }

    /// Drop `scope` and every scope created after it.
    ///
    /// Loop iterations release their scope once the body is evaluated, so
    /// the arena never holds more than one scope per nesting level.
    pub fn release(&mut self, scope: ScopeId) {
        if scope != ScopeId::ROOT {
            self.scopes.truncate(scope.index());
        }
    }

    pub fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.scopes[scope.index()].parent
    }

    /// Value bound directly in `scope`, ignoring ancestors.
    pub fn local(&self, scope: ScopeId, key: &str) -> Option<&Value> {
        self.scopes[scope.index()].bindings.get(key)
    }

    /// Number of live scopes, the root included.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}

impl Default for EvaluatorContext {
    fn default() -> Self {
        EvaluatorContext::new([])
    }
}
