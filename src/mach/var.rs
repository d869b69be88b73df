use std::collections::HashMap;
use std::rc::Rc;

/// ## Variable memory
///
/// One flat namespace for the life of the program. Variables come into
/// existence on first store.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, f64>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn fetch(&self, var_name: &str) -> Option<f64> {
        self.vars.get(var_name).copied()
    }

    pub fn store(&mut self, var_name: &str, value: f64) {
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.into(), value);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
