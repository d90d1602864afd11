//! Example walking through the storage strategies and their text dump
//!
//! This demonstrates:
//! 1. Building dense and sparse grids through the factories
//! 2. Reading rows, columns and valid cells
//! 3. Comparing grids stored with different strategies

use gridmat::{factory, CompactBoolMatrix, ListView, Matrix, MatrixError, SparseMatrix};

fn main() -> Result<(), MatrixError> {
    println!("=== Grid Tour ===\n");

    // Step 1: Dense grid
    let dense = factory::matrix(4, 3, |x, y| x + y * 4)?;
    println!("1. Dense grid:\n{dense}\n");
    println!("   Row 1: {:?}", dense.row(1)?.to_vec());
    println!("   Column 2: {:?}\n", dense.column(2)?.to_vec());

    // Step 2: Sparse grid with a diagonal gap
    let sparse = factory::sparse_matrix(4, 4, |x, y| x != y, |x, y| x * 10 + y)?;
    println!("2. Sparse grid:\n{sparse}\n");
    println!("   Valid cells: {}", sparse.indices().count());
    match sparse.get(2, 2) {
        Ok(value) => println!("   (2, 2) = {value}"),
        Err(err) => println!("   (2, 2): {err}"),
    }

    // Step 3: Same cells, computed on demand
    let lazy = factory::function_sparse_matrix(4, 4, |x, y| x != y, |x, y| x * 10 + y);
    println!(
        "\n3. Function-backed grid equals stored grid: {}",
        lazy.content_equals(&sparse)
    );

    // Step 4: Packed booleans
    let packed = CompactBoolMatrix::from_codes(3, vec![-1, 0, 1, 1, -1, 0, 1, 0, 1])?;
    println!("\n4. Packed booleans:\n{packed}");
    println!("   Raw bytes: {:02x?}", packed.as_bytes());

    Ok(())
}
