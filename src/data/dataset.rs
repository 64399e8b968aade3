use crate::foundation::error::{AnimatorError, AnimatorResult};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One point resolved into its five logical roles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointRecord {
    /// Spatial x coordinate.
    pub x: f64,
    /// Spatial y coordinate.
    pub y: f64,
    /// Spatial z coordinate.
    pub z: f64,
    /// Time coordinate.
    pub t: f64,
    /// Weight mapped to marker color and size.
    pub w: f64,
}

impl PointRecord {
    /// Construct a record from its five components.
    pub fn new(x: f64, y: f64, z: f64, t: f64, w: f64) -> Self {
        Self { x, y, z, t, w }
    }

    /// Spatial position as `[x, y, z]`.
    pub fn xyz(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// Column names for the five logical roles.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FieldMap {
    /// Column holding x.
    pub x: String,
    /// Column holding y.
    pub y: String,
    /// Column holding z.
    pub z: String,
    /// Column holding time.
    pub t: String,
    /// Column holding the weight.
    pub w: String,
}

impl Default for FieldMap {
    fn default() -> Self {
        Self {
            x: "x".to_string(),
            y: "y".to_string(),
            z: "z".to_string(),
            t: "t".to_string(),
            w: "w".to_string(),
        }
    }
}

impl FieldMap {
    fn names(&self) -> [&str; 5] {
        [&self.x, &self.y, &self.z, &self.t, &self.w]
    }
}

/// Table of equally sized, named numeric columns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    columns: BTreeMap<String, Vec<f64>>,
    len: usize,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum DatasetRepr {
    Records(Vec<BTreeMap<String, f64>>),
    Columns(BTreeMap<String, Vec<f64>>),
}

impl Dataset {
    /// Build a dataset from named columns. All columns must have the same length.
    pub fn from_columns<I, S>(columns: I) -> AnimatorResult<Self>
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        let mut out = BTreeMap::new();
        let mut len: Option<usize> = None;
        for (name, values) in columns {
            let name = name.into();
            match len {
                None => len = Some(values.len()),
                Some(n) if n != values.len() => {
                    return Err(AnimatorError::validation(format!(
                        "column '{name}' has {} values, expected {n}",
                        values.len()
                    )));
                }
                Some(_) => {}
            }
            out.insert(name, values);
        }
        Ok(Self {
            columns: out,
            len: len.unwrap_or(0),
        })
    }

    /// Build a dataset with the default column names from already-resolved records.
    pub fn from_records(records: &[PointRecord]) -> Self {
        let f = FieldMap::default();
        let col = |get: fn(&PointRecord) -> f64| records.iter().map(get).collect::<Vec<_>>();
        let columns = BTreeMap::from([
            (f.x, col(|p| p.x)),
            (f.y, col(|p| p.y)),
            (f.z, col(|p| p.z)),
            (f.t, col(|p| p.t)),
            (f.w, col(|p| p.w)),
        ]);
        Self {
            columns,
            len: records.len(),
        }
    }

    /// Parse a dataset from JSON.
    ///
    /// Accepts either an array of records (`[{"x": 1, "t": 0.5, ...}, ...]`) or an object of
    /// columns (`{"x": [..], "t": [..], ...}`). Every record must carry the same keys.
    pub fn from_reader<R: std::io::Read>(r: R) -> AnimatorResult<Self> {
        let repr: DatasetRepr = serde_json::from_reader(r)
            .map_err(|e| AnimatorError::validation(format!("parse dataset JSON: {e}")))?;
        match repr {
            DatasetRepr::Columns(columns) => Self::from_columns(columns),
            DatasetRepr::Records(records) => {
                let Some(first) = records.first() else {
                    return Ok(Self::default());
                };
                let mut columns: BTreeMap<String, Vec<f64>> = first
                    .keys()
                    .map(|k| (k.clone(), Vec::with_capacity(records.len())))
                    .collect();
                for (i, rec) in records.iter().enumerate() {
                    if rec.len() != columns.len() {
                        return Err(AnimatorError::validation(format!(
                            "record {i} has {} fields, expected {}",
                            rec.len(),
                            columns.len()
                        )));
                    }
                    for (name, values) in columns.iter_mut() {
                        let v = rec.get(name).ok_or_else(|| {
                            AnimatorError::validation(format!("record {i} is missing '{name}'"))
                        })?;
                        values.push(*v);
                    }
                }
                Self::from_columns(columns)
            }
        }
    }

    /// Parse a dataset from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> AnimatorResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            AnimatorError::validation(format!("open dataset JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return `true` when the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Borrow a column by name.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Column names in sorted order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Resolve the five roles named by `fields` into point records, in row order.
    ///
    /// A dataset with no columns at all is treated as empty rather than as missing fields.
    pub fn resolve(&self, fields: &FieldMap) -> AnimatorResult<Vec<PointRecord>> {
        if self.columns.is_empty() {
            return Err(AnimatorError::degenerate("dataset is empty"));
        }
        let mut cols: [&[f64]; 5] = [&[]; 5];
        for (slot, name) in cols.iter_mut().zip(fields.names()) {
            *slot = self
                .column(name)
                .ok_or_else(|| AnimatorError::field_not_found(name))?;
        }
        let [x, y, z, t, w] = cols;
        Ok((0..self.len)
            .map(|i| PointRecord::new(x[i], y[i], z[i], t[i], w[i]))
            .collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/dataset.rs"]
mod tests;
