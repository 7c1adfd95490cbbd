//! Grammar model types.

use indexmap::IndexMap;

use super::ModelError;

/// Interface handle, dense in declaration order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct InterfaceId(u32);

impl InterfaceId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Class handle, dense in declaration order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct ClassId(u32);

impl ClassId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Declared type of an attribute or field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Source type name as written in the grammar (e.g. `int`, `px`).
    pub ty: String,
    /// Optional ("maybe") value.
    pub maybe: bool,
}

impl Property {
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            maybe: false,
        }
    }

    pub fn maybe(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            maybe: true,
        }
    }
}

/// Property declarations keyed by name, in declaration order.
pub type Properties = IndexMap<String, Property>;

/// Abstraction implemented by one or more classes.
#[derive(Debug, Clone, Default)]
pub struct Interface {
    pub name: String,
    /// Positioned inputs.
    pub inputs: Properties,
    /// Public attributes.
    pub attributes: Properties,
    /// Public fields.
    pub fields: Properties,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Find a declared property in any of the three declaration groups.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.inputs
            .get(name)
            .or_else(|| self.attributes.get(name))
            .or_else(|| self.fields.get(name))
    }
}

/// Concrete node kind.
#[derive(Debug, Clone)]
pub struct Class {
    pub name: String,
    /// The single interface this class implements.
    pub interface: InterfaceId,
    /// Private fields.
    pub fields: Properties,
    /// Private attributes.
    pub attributes: Properties,
    /// Child role → interface the child must satisfy.
    pub children: IndexMap<String, InterfaceId>,
}

impl Class {
    pub fn new(name: impl Into<String>, interface: InterfaceId) -> Self {
        Self {
            name: name.into(),
            interface,
            fields: Properties::new(),
            attributes: Properties::new(),
            children: IndexMap::new(),
        }
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.fields
            .get(name)
            .or_else(|| self.attributes.get(name))
    }

    pub fn child(&self, role: &str) -> Option<InterfaceId> {
        self.children.get(role).copied()
    }
}

/// Who a planned datum belongs to.
///
/// `Universal` data (display name, sibling links, ...) exist on every node
/// and match a lookup for any owner.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Owner {
    Universal,
    Interface(InterfaceId),
    Class(ClassId),
}

/// Complete grammar model.
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    interfaces: Vec<Interface>,
    classes: Vec<Class>,
    interface_ids: IndexMap<String, InterfaceId>,
    class_ids: IndexMap<String, ClassId>,
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_interface(&mut self, interface: Interface) -> Result<InterfaceId, ModelError> {
        if self.interface_ids.contains_key(&interface.name) {
            return Err(ModelError::DuplicateInterface(interface.name));
        }

        let id = InterfaceId(self.interfaces.len() as u32);
        self.interface_ids.insert(interface.name.clone(), id);
        self.interfaces.push(interface);
        Ok(id)
    }

    /// Add a class. Its interface and child interfaces must already exist.
    pub fn add_class(&mut self, class: Class) -> Result<ClassId, ModelError> {
        if self.class_ids.contains_key(&class.name) {
            return Err(ModelError::DuplicateClass(class.name));
        }

        self.ensure_interface(class.interface);
        for &iface in class.children.values() {
            self.ensure_interface(iface);
        }

        let id = ClassId(self.classes.len() as u32);
        self.class_ids.insert(class.name.clone(), id);
        self.classes.push(class);
        Ok(id)
    }

    pub fn interface(&self, id: InterfaceId) -> Option<&Interface> {
        self.interfaces.get(id.index())
    }

    pub fn class(&self, id: ClassId) -> Option<&Class> {
        self.classes.get(id.index())
    }

    pub fn interface_by_name(&self, name: &str) -> Option<InterfaceId> {
        self.interface_ids.get(name).copied()
    }

    pub fn class_by_name(&self, name: &str) -> Option<ClassId> {
        self.class_ids.get(name).copied()
    }

    pub fn interfaces(&self) -> impl Iterator<Item = (InterfaceId, &Interface)> {
        self.interfaces
            .iter()
            .enumerate()
            .map(|(i, iface)| (InterfaceId(i as u32), iface))
    }

    pub fn classes(&self) -> impl Iterator<Item = (ClassId, &Class)> {
        self.classes
            .iter()
            .enumerate()
            .map(|(i, class)| (ClassId(i as u32), class))
    }

    pub fn interface_count(&self) -> usize {
        self.interfaces.len()
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Name of an owner; `None` for universal data.
    pub fn owner_name(&self, owner: Owner) -> Option<&str> {
        match owner {
            Owner::Universal => None,
            Owner::Interface(id) => Some(self.ensure_interface(id).name.as_str()),
            Owner::Class(id) => Some(self.ensure_class(id).name.as_str()),
        }
    }

    /// Interface implemented by a class owner.
    pub fn interface_of(&self, owner: Owner) -> Option<InterfaceId> {
        match owner {
            Owner::Class(id) => Some(self.ensure_class(id).interface),
            Owner::Universal | Owner::Interface(_) => None,
        }
    }

    /// Property declared directly on `owner`, without interface fallback.
    pub fn property(&self, owner: Owner, name: &str) -> Option<&Property> {
        match owner {
            Owner::Universal => None,
            Owner::Interface(id) => self.ensure_interface(id).property(name),
            Owner::Class(id) => self.ensure_class(id).property(name),
        }
    }
}
