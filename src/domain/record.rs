/// One row of tabular input: an ordered mapping from column name to value.
///
/// Lookups of absent columns yield the empty string. Inserting an existing column
/// overwrites it in place; new columns are appended, so column order follows
/// first insertion. Values read from numeric spreadsheet cells also keep their number,
/// so they can be written back as numbers.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Record {
    fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq)]
struct Field {
    name: String,
    value: String,
    number: Option<f64>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: &str) -> &str {
        self.field(column)
            .map(|field| field.value.as_str())
            .unwrap_or("")
    }

    /// The numeric value of `column`, if it was inserted as a number.
    pub fn number(&self, column: &str) -> Option<f64> {
        self.field(column).and_then(|field| field.number)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.field(column).is_some()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.set(column.into(), value.into(), None);
    }

    /// Inserts a number, readable as text through [`Record::get`] in its display form.
    pub fn insert_number(&mut self, column: impl Into<String>, number: f64) {
        self.set(column.into(), number.to_string(), Some(number));
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn field(&self, column: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == column)
    }

    fn set(&mut self, name: String, value: String, number: Option<f64>) {
        match self.fields.iter_mut().find(|field| field.name == name) {
            Some(field) => {
                field.value = value;
                field.number = number;
            }
            None => self.fields.push(Field {
                name,
                value,
                number,
            }),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (column, value) in iter {
            record.insert(column, value);
        }
        record
    }
}
