//! Info command implementation

use crate::cli::InfoArgs;
use qrframe::Result;

pub fn run(args: &InfoArgs) -> Result<()> {
    // With no selector, print everything.
    let all = !args.frames && !args.styles;

    if args.frames || all {
        println!("Frames:");
        println!("  none (default)");
        for name in qrframe::frames::registered_names() {
            println!("  {name}");
        }
    }

    if args.styles || all {
        println!("Module styles:");
        for name in ["square (default)", "dots", "rounded"] {
            println!("  {name}");
        }
        println!("Eye styles:");
        for name in ["square (default)", "circle", "rounded", "leaf", "diamond"] {
            println!("  {name}");
        }
        println!("Error-correction levels:");
        for name in ["l (low)", "m (medium, default)", "q (quartile)", "h (high)"] {
            println!("  {name}");
        }
    }

    Ok(())
}
