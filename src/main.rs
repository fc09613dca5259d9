use clap::Parser;
use lensim::{
    console::{run_interactive, Args, PartialArgs},
    error::LsResult,
    Simulator,
};
use std::io::{stdin, stdout, BufReader, BufWriter};

fn main() -> LsResult<()> {
    env_logger::init();

    //parse and validate CLI arguments
    let args = Args::try_from(PartialArgs::parse())?;

    //first frame plus the one-time static snapshot
    let mut simulator = Simulator::new(args.object_distance, args.output.clone())?;
    simulator.update(args.object_distance)?;
    simulator.save_snapshot()?;
    println!("diagram written to {}", args.output.display());

    //console loop standing in for the GUI slider
    if !args.single_shot {
        let mut reader = BufReader::new(stdin().lock());
        let mut writer = BufWriter::new(stdout().lock());
        run_interactive(&mut simulator, &mut reader, &mut writer)?;
    }
    Ok(())
}
