//! N-dimensional grid storage.
//!
//! A [`Grid`] stores its entries in a flat row-major `Vec` next to a shape
//! vector, so slicing along the outermost dimension is a cheap subslice and
//! no dimension-specific container types are needed. Shape is preserved by
//! every transformation stage; only the element type changes.

use crate::error::RenderError;

// =============================================================================
// Grid
// =============================================================================

/// An n-dimensional grid with flat row-major storage.
///
/// `index = i0 * (d1 * d2 * …) + i1 * (d2 * …) + …`
///
/// A 0-D grid holds exactly one entry; a 1-D grid is a vector; higher
/// dimensions nest row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    shape: Vec<usize>,
    data: Vec<T>,
}

impl<T> Grid<T> {
    /// Create a 0-D grid holding a single value.
    pub fn scalar(value: T) -> Self {
        Self {
            shape: Vec::new(),
            data: vec![value],
        }
    }

    /// Create a 1-D grid from a vector.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            shape: vec![data.len()],
            data,
        }
    }

    /// Create a 2-D grid from rows.
    ///
    /// Fails with [`RenderError::InvalidInput`] if the rows have unequal
    /// lengths: ragged input does not form a rectangular grid.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, RenderError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(height * width);
        for row in rows {
            if row.len() != width {
                return Err(RenderError::InvalidInput(format!(
                    "rows of unequal length ({} vs {})",
                    row.len(),
                    width
                )));
            }
            data.extend(row);
        }
        Ok(Self {
            shape: vec![height, width],
            data,
        })
    }

    /// Create a grid with an explicit shape over flat row-major data.
    ///
    /// Fails with [`RenderError::InvalidInput`] if the shape's product does
    /// not match the data length. Note that an empty shape describes a 0-D
    /// grid and therefore requires exactly one entry.
    pub fn from_shape_vec(shape: Vec<usize>, data: Vec<T>) -> Result<Self, RenderError> {
        let expected: usize = shape.iter().product();
        if expected != data.len() {
            return Err(RenderError::InvalidInput(format!(
                "shape {:?} implies {} entries, got {}",
                shape,
                expected,
                data.len()
            )));
        }
        Ok(Self { shape, data })
    }

    /// Number of dimensions.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// The shape vector.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Total number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the grid holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over all entries in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Map every entry, preserving the shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            shape: self.shape.clone(),
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Borrow the whole grid as a view.
    pub fn view(&self) -> GridView<'_, T> {
        GridView {
            shape: &self.shape,
            data: &self.data,
        }
    }
}

impl<T> From<Vec<T>> for Grid<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

// =============================================================================
// GridView
// =============================================================================

/// A borrowed view of a grid or one of its sub-grids.
///
/// Slicing along the outermost dimension never copies entries; each
/// sub-view shares the parent's flat storage.
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a, T> {
    shape: &'a [usize],
    data: &'a [T],
}

impl<'a, T> GridView<'a, T> {
    /// Number of dimensions of this view.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// The shape of this view.
    #[inline]
    pub fn shape(&self) -> &'a [usize] {
        self.shape
    }

    /// The single entry of a 0-D view.
    #[inline]
    pub fn entry(&self) -> &'a T {
        &self.data[0]
    }

    /// All entries of this view in row-major order.
    #[inline]
    pub fn entries(&self) -> &'a [T] {
        self.data
    }

    /// Iterate over the sub-views obtained by slicing along the outermost
    /// dimension. Each sub-view has one dimension fewer.
    pub fn outer(self) -> impl Iterator<Item = GridView<'a, T>> {
        let (count, rest) = match self.shape.split_first() {
            Some((&n, rest)) => (n, rest),
            None => (0, &[][..]),
        };
        let inner: usize = rest.iter().product();
        let data = self.data;
        (0..count).map(move |i| GridView {
            shape: rest,
            data: &data[i * inner..(i + 1) * inner],
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
