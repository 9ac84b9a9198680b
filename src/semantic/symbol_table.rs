use log::trace;

/// What introduced a lexical scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Namespace,
    Function,
    If,
    While,
    For,
    Struct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    BuiltIn,
    Function,
    Variable,
    Struct,
    Enum,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub kind: DeclarationKind,
}

impl Declaration {
    pub fn new(name: impl Into<String>, kind: DeclarationKind) -> Self {
        Declaration {
            name: name.into(),
            kind,
        }
    }
}

/// Declarations grouped by the scope they were pushed in.
///
/// The global scope sits at the bottom of the stack and cannot be popped.
/// Lookups walk from the innermost scope outwards, so inner declarations
/// shadow outer ones.
#[derive(Debug)]
pub struct SymbolTable {
    declarations: Vec<Vec<Declaration>>,
    scopes: Vec<ScopeKind>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            declarations: vec![vec![]],
            scopes: vec![],
        }
    }

    /// Creates a table whose global scope already holds the given built-ins.
    pub fn with_built_ins(names: &[&str]) -> Self {
        let mut table = Self::new();
        for name in names {
            table.push_declaration(Declaration::new(*name, DeclarationKind::BuiltIn));
        }
        table
    }

    pub fn push_scope(&mut self, kind: ScopeKind) {
        trace!("entering {:?} scope", kind);
        self.scopes.push(kind);
        self.declarations.push(vec![]);
    }

    /// Pops the innermost scope with every declaration made inside it.
    ///
    /// Returns `None` when only the global scope is left.
    pub fn pop_scope(&mut self) -> Option<ScopeKind> {
        let kind = self.scopes.pop()?;
        self.declarations.pop();
        trace!("leaving {:?} scope", kind);
        Some(kind)
    }

    /// Number of scopes opened on top of the global one.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn current_scope(&self) -> Option<ScopeKind> {
        self.scopes.last().copied()
    }

    /// Adds a declaration to the innermost scope.
    ///
    /// Returns `false`, leaving the table untouched, if that scope already
    /// declares the same name.
    pub fn push_declaration(&mut self, declaration: Declaration) -> bool {
        let Some(current) = self.declarations.last_mut() else {
            return false;
        };
        if current.iter().any(|existing| existing.name == declaration.name) {
            return false;
        }
        current.push(declaration);
        true
    }

    pub fn declaration_exists(&self, name: &str) -> bool {
        self.get_declaration(name).is_some()
    }

    /// Finds the visible declaration for `name`, innermost scope first.
    pub fn get_declaration(&self, name: &str) -> Option<&Declaration> {
        self.declarations
            .iter()
            .rev()
            .find_map(|scope| scope.iter().find(|declaration| declaration.name == name))
    }
}
