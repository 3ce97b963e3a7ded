use qmkit::efmt::UNICODE_FMT_CFG;
use qmkit::*;

fn main() {
    println!("A simple example!");

    let problem: Problem = "F(A, B, C, D) = m(4, 8, 10, 11, 12, 15) + d(9, 14)"
        .parse()
        .unwrap();
    let solution = Minimizer::new().minimize(&problem).unwrap();

    println!("Minimized expression: {}", &solution);
    println!("With logic symbols: {}", solution.format_with(&UNICODE_FMT_CFG));
    for term in solution.terms() {
        println!("  {}", term);
    }
}
