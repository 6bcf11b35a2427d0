//! CSR (Compressed Sparse Row) complex matrix.
//!
//! Every factor of a Jordan-Wigner string has at most one non-zero per
//! row, so products of them stay extremely sparse. Kronecker and matrix
//! products are computed directly in CSR form without densifying.

use ndarray::{Array1, Array2};
use num_complex::Complex64;

use crate::generators::Generator;

/// Sparse complex matrix in Compressed Sparse Row format.
///
/// Column indices within each row are strictly increasing and no stored
/// value is exactly zero.
#[derive(Clone, Debug, PartialEq)]
pub struct CsrMatrix {
    pub nrows: usize,
    pub ncols: usize,
    pub row_ptr: Vec<usize>,
    pub col_indices: Vec<usize>,
    pub values: Vec<Complex64>,
}

impl CsrMatrix {
    /// Empty (all-zero) matrix of the given shape.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            row_ptr: vec![0; nrows + 1],
            col_indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// `n x n` identity.
    pub fn identity(n: usize) -> Self {
        Self {
            nrows: n,
            ncols: n,
            row_ptr: (0..=n).collect(),
            col_indices: (0..n).collect(),
            values: vec![Complex64::new(1.0, 0.0); n],
        }
    }

    /// 1x1 matrix holding `value`, the seed of a Kronecker chain.
    pub fn scalar(value: Complex64) -> Self {
        Self::from_rows(1, vec![vec![(0, value)]])
    }

    /// Convert a 2x2 generator, dropping its zero entries.
    pub fn from_generator(g: &Generator) -> Self {
        let rows = g
            .iter()
            .map(|row| row.iter().copied().enumerate().collect::<Vec<_>>())
            .collect();
        Self::from_rows(2, rows)
    }

    /// Compress a dense matrix, dropping exact zeros.
    pub fn from_dense(dense: &Array2<Complex64>) -> Self {
        let ncols = dense.ncols();
        let rows = dense
            .rows()
            .into_iter()
            .map(|row| row.iter().copied().enumerate().collect::<Vec<_>>())
            .collect();
        Self::from_rows(ncols, rows)
    }

    /// Build from per-row `(col, value)` lists already sorted by column.
    fn from_rows(ncols: usize, rows: Vec<Vec<(usize, Complex64)>>) -> Self {
        let nrows = rows.len();
        let mut row_ptr = Vec::with_capacity(nrows + 1);
        let mut col_indices = Vec::new();
        let mut values = Vec::new();

        row_ptr.push(0);
        for row in rows {
            for (col, val) in row {
                if val != Complex64::new(0.0, 0.0) {
                    col_indices.push(col);
                    values.push(val);
                }
            }
            row_ptr.push(col_indices.len());
        }

        Self {
            nrows,
            ncols,
            row_ptr,
            col_indices,
            values,
        }
    }

    /// Number of stored non-zero entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Column indices and values of row `r`.
    #[inline]
    fn row(&self, r: usize) -> (&[usize], &[Complex64]) {
        let start = self.row_ptr[r];
        let end = self.row_ptr[r + 1];
        (&self.col_indices[start..end], &self.values[start..end])
    }

    /// Entry at `(r, c)`; zero when not stored.
    pub fn get(&self, r: usize, c: usize) -> Complex64 {
        let (cols, vals) = self.row(r);
        match cols.binary_search(&c) {
            Ok(pos) => vals[pos],
            Err(_) => Complex64::new(0.0, 0.0),
        }
    }

    /// Kronecker product `self ⊗ other`, produced directly in CSR form.
    ///
    /// Output row `ra * other.nrows + rb` is the outer product of row `ra`
    /// of `self` with row `rb` of `other`; iterating `self` columns outer
    /// and `other` columns inner keeps the column order sorted.
    pub fn kron(&self, other: &CsrMatrix) -> CsrMatrix {
        let nrows = self.nrows * other.nrows;
        let ncols = self.ncols * other.ncols;

        let mut row_ptr = Vec::with_capacity(nrows + 1);
        let mut col_indices = Vec::with_capacity(self.nnz() * other.nnz());
        let mut values = Vec::with_capacity(self.nnz() * other.nnz());

        row_ptr.push(0);
        for ra in 0..self.nrows {
            let (a_cols, a_vals) = self.row(ra);
            for rb in 0..other.nrows {
                let (b_cols, b_vals) = other.row(rb);
                for (&ca, &va) in a_cols.iter().zip(a_vals) {
                    for (&cb, &vb) in b_cols.iter().zip(b_vals) {
                        col_indices.push(ca * other.ncols + cb);
                        values.push(va * vb);
                    }
                }
                row_ptr.push(col_indices.len());
            }
        }

        CsrMatrix {
            nrows,
            ncols,
            row_ptr,
            col_indices,
            values,
        }
    }

    /// Plain (non-conjugating) transpose.
    pub fn transpose(&self) -> CsrMatrix {
        self.transpose_map(|v| v)
    }

    /// Conjugate transpose.
    pub fn adjoint(&self) -> CsrMatrix {
        self.transpose_map(|v| v.conj())
    }

    fn transpose_map(&self, f: impl Fn(Complex64) -> Complex64) -> CsrMatrix {
        // Count entries per output row (= input column)
        let mut row_ptr = vec![0usize; self.ncols + 1];
        for &c in &self.col_indices {
            row_ptr[c + 1] += 1;
        }
        for i in 0..self.ncols {
            row_ptr[i + 1] += row_ptr[i];
        }

        let mut next = row_ptr.clone();
        let mut col_indices = vec![0usize; self.nnz()];
        let mut values = vec![Complex64::new(0.0, 0.0); self.nnz()];

        // Scanning input rows in order keeps output columns sorted
        for r in 0..self.nrows {
            let (cols, vals) = self.row(r);
            for (&c, &v) in cols.iter().zip(vals) {
                let dst = next[c];
                col_indices[dst] = r;
                values[dst] = f(v);
                next[c] += 1;
            }
        }

        CsrMatrix {
            nrows: self.ncols,
            ncols: self.nrows,
            row_ptr,
            col_indices,
            values,
        }
    }

    /// Sparse matrix product `self · other` (row-by-row accumulation).
    pub fn matmul(&self, other: &CsrMatrix) -> CsrMatrix {
        assert_eq!(
            self.ncols, other.nrows,
            "matmul shape mismatch: {:?} x {:?}",
            self.shape(),
            other.shape()
        );

        let zero = Complex64::new(0.0, 0.0);
        let mut acc = vec![zero; other.ncols];
        let mut touched = vec![false; other.ncols];
        let mut rows = Vec::with_capacity(self.nrows);

        for r in 0..self.nrows {
            let mut cols: Vec<usize> = Vec::new();
            let (a_cols, a_vals) = self.row(r);
            for (&k, &va) in a_cols.iter().zip(a_vals) {
                let (b_cols, b_vals) = other.row(k);
                for (&c, &vb) in b_cols.iter().zip(b_vals) {
                    if !touched[c] {
                        touched[c] = true;
                        cols.push(c);
                    }
                    acc[c] += va * vb;
                }
            }

            cols.sort_unstable();
            let row: Vec<(usize, Complex64)> = cols
                .iter()
                .map(|&c| {
                    let v = acc[c];
                    acc[c] = zero;
                    touched[c] = false;
                    (c, v)
                })
                .collect();
            rows.push(row);
        }

        Self::from_rows(other.ncols, rows)
    }

    /// Element-wise sum.
    pub fn add(&self, other: &CsrMatrix) -> CsrMatrix {
        assert_eq!(self.shape(), other.shape(), "add shape mismatch");

        let rows = (0..self.nrows)
            .map(|r| {
                let (a_cols, a_vals) = self.row(r);
                let (b_cols, b_vals) = other.row(r);
                let mut merged = Vec::with_capacity(a_cols.len() + b_cols.len());
                let (mut i, mut j) = (0, 0);
                while i < a_cols.len() || j < b_cols.len() {
                    if j == b_cols.len() || (i < a_cols.len() && a_cols[i] < b_cols[j]) {
                        merged.push((a_cols[i], a_vals[i]));
                        i += 1;
                    } else if i == a_cols.len() || b_cols[j] < a_cols[i] {
                        merged.push((b_cols[j], b_vals[j]));
                        j += 1;
                    } else {
                        merged.push((a_cols[i], a_vals[i] + b_vals[j]));
                        i += 1;
                        j += 1;
                    }
                }
                merged
            })
            .collect();

        Self::from_rows(self.ncols, rows)
    }

    /// Multiply every entry by `factor`.
    pub fn scale(&self, factor: Complex64) -> CsrMatrix {
        if factor == Complex64::new(0.0, 0.0) {
            return Self::zeros(self.nrows, self.ncols);
        }
        let mut out = self.clone();
        out.values.iter_mut().for_each(|v| *v *= factor);
        out
    }

    /// Compute y = A * x.
    pub fn matvec(&self, x: &Array1<Complex64>) -> Array1<Complex64> {
        assert_eq!(x.len(), self.ncols, "matvec length mismatch");
        (0..self.nrows)
            .map(|r| {
                let (cols, vals) = self.row(r);
                cols.iter()
                    .zip(vals)
                    .map(|(&c, &v)| v * x[c])
                    .sum::<Complex64>()
            })
            .collect()
    }

    /// Expand into a dense array.
    pub fn to_dense(&self) -> Array2<Complex64> {
        let mut dense = Array2::zeros((self.nrows, self.ncols));
        for r in 0..self.nrows {
            let (cols, vals) = self.row(r);
            for (&c, &v) in cols.iter().zip(vals) {
                dense[[r, c]] = v;
            }
        }
        dense
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{to_array, LOWERING, PAULI_X, PAULI_Y, PAULI_Z};
    use ndarray::linalg::kron;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_from_generator_drops_zeros() {
        let x = CsrMatrix::from_generator(&PAULI_X);
        assert_eq!(x.nnz(), 2);
        assert_eq!(x.get(0, 1), c(1.0, 0.0));
        assert_eq!(x.get(0, 0), c(0.0, 0.0));

        let low = CsrMatrix::from_generator(&LOWERING);
        assert_eq!(low.nnz(), 1);
        assert_eq!(low.row_ptr, vec![0, 0, 1]);
    }

    #[test]
    fn test_kron_matches_dense() {
        let y = CsrMatrix::from_generator(&PAULI_Y);
        let z = CsrMatrix::from_generator(&PAULI_Z);
        let x = CsrMatrix::from_generator(&PAULI_X);

        let sparse = y.kron(&z).kron(&x);
        let dense = kron(
            &kron(&to_array(&PAULI_Y), &to_array(&PAULI_Z)),
            &to_array(&PAULI_X),
        );

        assert_eq!(sparse.shape(), (8, 8));
        assert_eq!(sparse.nnz(), 8);
        assert_eq!(sparse.to_dense(), dense);
    }

    #[test]
    fn test_kron_with_scalar_seed() {
        let x = CsrMatrix::from_generator(&PAULI_X);
        let seeded = CsrMatrix::scalar(c(1.0, 0.0)).kron(&x);
        assert_eq!(seeded, x);
    }

    #[test]
    fn test_transpose_and_adjoint() {
        let y = CsrMatrix::from_generator(&PAULI_Y);
        let yt = y.transpose();
        assert_eq!(yt.get(0, 1), c(0.0, 1.0));
        assert_eq!(yt.get(1, 0), c(0.0, -1.0));

        // Y is Hermitian
        assert_eq!(y.adjoint(), y);

        let m = CsrMatrix::from_dense(&ndarray::arr2(&[
            [c(1.0, 0.0), c(0.0, 0.0), c(2.0, 1.0)],
            [c(0.0, 0.0), c(3.0, 0.0), c(0.0, 0.0)],
        ]));
        let mt = m.transpose();
        assert_eq!(mt.shape(), (3, 2));
        assert_eq!(mt.to_dense(), m.to_dense().t().to_owned());
    }

    #[test]
    fn test_matmul_matches_dense() {
        let a = CsrMatrix::from_generator(&PAULI_X).kron(&CsrMatrix::from_generator(&PAULI_Y));
        let b = CsrMatrix::from_generator(&LOWERING).kron(&CsrMatrix::identity(2));

        let product = a.matmul(&b);
        assert_eq!(product.to_dense(), a.to_dense().dot(&b.to_dense()));
    }

    #[test]
    fn test_matmul_drops_cancellations() {
        // Z·Z = I and (iY)(iY) = -I, their sum cancels to zero
        let z = CsrMatrix::from_generator(&PAULI_Z);
        let iy = CsrMatrix::from_generator(&PAULI_Y).scale(c(0.0, 1.0));
        let sum = z.matmul(&z).add(&iy.matmul(&iy));
        assert_eq!(sum.nnz(), 0);
        assert_eq!(sum.shape(), (2, 2));
    }

    #[test]
    fn test_add_merges_rows() {
        let x = CsrMatrix::from_generator(&PAULI_X);
        let z = CsrMatrix::from_generator(&PAULI_Z);
        let sum = x.add(&z);
        assert_eq!(sum.to_dense(), to_array(&PAULI_X) + to_array(&PAULI_Z));
        assert_eq!(sum.nnz(), 4);
    }

    #[test]
    fn test_matvec() {
        let x = CsrMatrix::from_generator(&PAULI_X);
        let v = ndarray::arr1(&[c(1.0, 0.0), c(0.0, 2.0)]);
        let y = x.matvec(&v);
        assert_eq!(y, ndarray::arr1(&[c(0.0, 2.0), c(1.0, 0.0)]));
    }

    #[test]
    fn test_identity_and_zeros() {
        let id = CsrMatrix::identity(4);
        assert_eq!(id.to_dense(), Array2::<Complex64>::eye(4));

        let zero = CsrMatrix::zeros(3, 2);
        assert_eq!(zero.nnz(), 0);
        assert_eq!(zero.to_dense(), Array2::<Complex64>::zeros((3, 2)));
    }
}
