//! Built-in circuit diagrams and the named-template catalog.
//!
//! Templates are plain text blocks in the cell alphabet: `'h'` head,
//! `'t'` tail, `'#'` conductor, anything else empty. They carry no header
//! or size metadata; dimensions come from the grid a template is loaded
//! into, and [`Grid::load`](crate::core::Grid::load) centers the block.
//! The surrounding newlines in the built-in diagrams are content: they
//! count as blank lines during vertical centering.
//!
//! The engine never looks names up on its own. Hosts pick a text block,
//! from the catalog or anywhere else, and pass it to `load`.

use rustc_hash::FxHashMap;

/// Two AND gates wired to a shared output run.
pub const AND: &str = "
h##########
           ###
        # #   #
h###   ###    #
    # # # # # #  #####
    # #    ###  #
    # #     # ##
     #
";

/// An empty diagram; loading it clears the grid.
pub const BLANK: &str = "";

/// A closed conductor loop holding one circulating pulse.
pub const CIRCLE: &str = "
 ######
#      t
#      h
 ######
";

/// Two diodes in opposite orientations.
pub const DIODES: &str = "
      ##
h###### #####
      ##

      ##
h##### ######
      ##
";

/// An OR gate joining two input runs.
pub const OR: &str = "
h#####
      #
     #######
      #
h#####
";

/// A loop that emits a pulse onto an output run each revolution.
pub const REPEATER: &str = "
     ############
     #          #
     #          #     #
h#####          ########
     #          #     #
     #    ##    #
     ##### ######
          ##
";

/// Registry of named templates.
///
/// [`builtin`](TemplateCatalog::builtin) pre-loads the diagrams above;
/// hosts can register their own under fresh names. Names are exact-match
/// strings with no reserved values.
///
/// ## Example
///
/// ```
/// use wireworld_engine::{Grid, TemplateCatalog};
///
/// let catalog = TemplateCatalog::builtin();
/// let diagram = catalog.get("or").unwrap();
/// let grid = Grid::from_template(16, 7, diagram).unwrap();
/// assert_eq!(grid.len(), 16 * 7);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TemplateCatalog {
    templates: FxHashMap<String, String>,
}

impl TemplateCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog pre-loaded with the built-in diagrams.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.register("and", AND);
        catalog.register("blank", BLANK);
        catalog.register("circle", CIRCLE);
        catalog.register("diodes", DIODES);
        catalog.register("or", OR);
        catalog.register("repeater", REPEATER);
        catalog
    }

    /// Register a template under `name`.
    ///
    /// Panics if the name is already registered.
    pub fn register(&mut self, name: impl Into<String>, template: impl Into<String>) {
        let name = name.into();
        if self.templates.contains_key(&name) {
            panic!("Template {:?} already registered", name);
        }
        self.templates.insert(name, template.into());
    }

    /// Look a template up by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.templates.get(name).map(String::as_str)
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Number of registered templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the catalog has no templates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Iterate the registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }
}
