use fem_1d::fem_problem::galerkin::galerkin_sample;
use fem_1d::fem_problem::linalg::gaussian_elimination::gaussian_solve;
use fem_1d::{SolutionField, UniformMesh};

use std::io::{self, Write};

const OUTPUT_FILE: &str = "data.txt";

fn main() {
    print!("Number of basis functions n: ");
    io::stdout().flush().expect("Unable to flush the prompt to stdout!");

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .expect("Unable to read n from stdin!");
    let n: usize = input
        .trim()
        .parse()
        .expect("Unable to parse n as an unsigned integer!");

    let mesh = UniformMesh::new(n);
    let solution = gaussian_solve(galerkin_sample(&mesh));
    let field =
        SolutionField::new(&mesh, solution).expect("Solver returned a misshapen solution vector!");

    match field.print_to_file(OUTPUT_FILE) {
        Ok(()) => println!("Data written to file: {}", OUTPUT_FILE),
        Err(_) => eprintln!("Could not open file: {}", OUTPUT_FILE),
    }
}
