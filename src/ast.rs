use serde::Serialize;

/// A named, possibly nested block of the definition language: a job, job-net
/// or group. Built bottom-up in a single parse pass and immutable afterwards;
/// a fresh parse (or an external builder) is needed to obtain a different
/// tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unit {
    name: String,
    /// Positional header attributes exactly as written, so `unit=X,,,;`
    /// keeps its three empty fields through a round trip.
    attrs: Vec<String>,
    params: Vec<Parameter>,
    subunits: Vec<Unit>,
}

impl Unit {
    pub fn new(
        name: impl Into<String>,
        attrs: Vec<String>,
        params: Vec<Parameter>,
        subunits: Vec<Unit>,
    ) -> Self {
        Unit {
            name: name.into(),
            attrs,
            params,
            subunits,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw positional header attributes, in source order. Entries may be
    /// empty strings when the source carried empty fields.
    pub fn attrs(&self) -> &[String] {
        &self.attrs
    }

    /// First header attribute (the permission mode), if present and non-empty.
    pub fn permission_mode(&self) -> Option<&str> {
        self.attr(0)
    }

    /// Second header attribute (the owning user), if present and non-empty.
    pub fn owner(&self) -> Option<&str> {
        self.attr(1)
    }

    /// Third header attribute (the resource group), if present and non-empty.
    pub fn resource_group(&self) -> Option<&str> {
        self.attr(2)
    }

    fn attr(&self, index: usize) -> Option<&str> {
        match self.attrs.get(index) {
            Some(a) if !a.is_empty() => Some(a.as_str()),
            _ => None,
        }
    }

    /// All parameters in source order. Repeated names stay separate entries.
    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    /// First parameter with the given name, if any.
    pub fn param(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|p| p.name() == name)
    }

    /// All parameters with the given name, in source order.
    pub fn params_by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Parameter> {
        self.params.iter().filter(move |p| p.name() == name)
    }

    /// Direct child units in source order.
    pub fn subunits(&self) -> &[Unit] {
        &self.subunits
    }

    /// First direct child with the given unit name, if any.
    pub fn subunit(&self, name: &str) -> Option<&Unit> {
        self.subunits.iter().find(|u| u.name() == name)
    }
}

/// A named, ordered list of values attached to a unit, e.g. `el=A,g,+80 +48;`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    name: String,
    values: Vec<Value>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Parameter {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn value(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }
}

/// One parameter value. Each variant keeps enough information to regenerate
/// equivalent source text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Value {
    /// Raw unquoted text, kept exactly as written (embedded spaces included).
    Scalar(String),
    /// Quoted string with the surrounding quotes stripped and escape
    /// sequences resolved.
    Quoted(String),
    /// Parenthesized `key=value` tuple.
    Tuple(Tuple),
}

impl Value {
    /// The value's text content: the raw run for scalars, the unescaped
    /// content for quoted strings, the `Display` rendering for tuples
    /// (readable, not reparsable).
    pub fn raw_text(&self) -> String {
        match self {
            Value::Scalar(s) | Value::Quoted(s) => s.clone(),
            Value::Tuple(t) => t.to_string(),
        }
    }

    pub fn as_scalar(&self) -> Option<&str> {
        if let Value::Scalar(s) = self { Some(s) } else { None }
    }

    pub fn as_quoted(&self) -> Option<&str> {
        if let Value::Quoted(s) = self { Some(s) } else { None }
    }

    pub fn as_tuple(&self) -> Option<&Tuple> {
        if let Value::Tuple(t) = self { Some(t) } else { None }
    }
}

/// Ordered sequence of tuple entries. Keys need not be unique and entry order
/// is significant for round-trip fidelity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tuple {
    entries: Vec<TupleEntry>,
}

impl Tuple {
    pub fn new(entries: Vec<TupleEntry>) -> Self {
        Tuple { entries }
    }

    pub fn entries(&self) -> &[TupleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value of the first entry carrying the given key, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|e| e.key() == Some(key))
            .map(|e| e.value())
    }
}

impl std::fmt::Display for Tuple {
    /// Renders the tuple as `(k=v,positional,...)` with nested values
    /// rendered by `raw_text`. Quoted entries lose their quotes and escapes
    /// here, so this is a readable rendering, not reparsable source text;
    /// the formatter produces the faithful form.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            if let Some(key) = entry.key() {
                write!(f, "{}=", key)?;
            }
            write!(f, "{}", entry.value().raw_text())?;
        }
        write!(f, ")")
    }
}

/// One tuple entry: `key=value`, or a positional bare value without a key
/// (e.g. the trailing `con` in `ar=(f=A,t=B,con)`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TupleEntry {
    key: Option<String>,
    value: Value,
}

impl TupleEntry {
    pub fn keyed(key: impl Into<String>, value: Value) -> Self {
        TupleEntry {
            key: Some(key.into()),
            value,
        }
    }

    pub fn positional(value: Value) -> Self {
        TupleEntry { key: None, value }
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}
