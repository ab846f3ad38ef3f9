use clap::{crate_description, crate_version, Arg, ArgMatches, Command};

use std::path::Path;

use unisteg_core::api;
use unisteg_core::commands::{conceal, evaluate};
use unisteg_core::keyring::MemoryKeyring;
use unisteg_core::Result;

mod keys;

fn main() -> Result<()> {
    env_logger::init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("conceal", m)) => {
            let ring = conceal_keyring(m)?;

            conceal(
                Path::new(m.get_one::<String>("media").unwrap()),
                Path::new(m.get_one::<String>("write_to_file").unwrap()),
                m.get_one::<String>("message").unwrap(),
                "recipient",
                "self",
                &ring,
            )?;
        }
        Some(("reveal", m)) => {
            // only the own exchange secret and the sender's verifying key
            // take part in revealing; no other key material is asked for
            let identity =
                keys::load_exchange(Path::new(m.get_one::<String>("exchange_key").unwrap()))?;
            let sender =
                keys::load_verifying(Path::new(m.get_one::<String>("sender_verify_key").unwrap()))?;

            let message = api::reveal::prepare()
                .with_stego_image(m.get_one::<String>("input_image").unwrap())
                .with_identity(identity.secret().clone())
                .from_sender(sender)
                .execute()?;
            println!("{message}");
        }
        Some(("eval", m)) => {
            let report = evaluate(
                Path::new(m.get_one::<String>("original").unwrap()),
                Path::new(m.get_one::<String>("stego").unwrap()),
            )?;
            print_report(&report);
        }
        _ => {}
    }

    Ok(())
}

fn build_cli() -> Command {
    Command::new("UniSteg CLI")
        .version(crate_version!())
        .about(crate_description!())
        .arg_required_else_help(true)
        .subcommand(
            Command::new("conceal")
                .about("Conceals a signed message in a PNG or JPEG image")
                .arg(
                    Arg::new("media")
                        .short('i')
                        .long("in")
                        .value_name("cover image")
                        .required(true)
                        .help("Cover image such as a PNG or JPEG file, used readonly"),
                )
                .arg(
                    Arg::new("write_to_file")
                        .short('o')
                        .long("out")
                        .value_name("output image file")
                        .required(true)
                        .help("Stego image will be stored as PNG file"),
                )
                .arg(
                    Arg::new("message")
                        .short('m')
                        .long("message")
                        .value_name("text message")
                        .required(true)
                        .help("The message that will be hidden"),
                )
                .arg(
                    Arg::new("recipient_key")
                        .long("recipient-key")
                        .value_name("key file")
                        .required(true)
                        .help("Recipient public exchange key, the seed is sealed for it"),
                )
                .arg(
                    Arg::new("recipient_verify_key")
                        .long("recipient-verify-key")
                        .value_name("key file")
                        .required(true)
                        .help("Recipient public verifying key (kept alongside the exchange key)"),
                )
                .arg(
                    Arg::new("exchange_key")
                        .long("exchange-key")
                        .value_name("key file")
                        .required(true)
                        .help("Own secret exchange key"),
                )
                .arg(
                    Arg::new("signing_key")
                        .long("signing-key")
                        .value_name("key file")
                        .required(true)
                        .help("Own secret signing key, the message is signed with it"),
                ),
        )
        .subcommand(
            Command::new("reveal")
                .about("Reveals an authenticated message from a stego image")
                .arg(
                    Arg::new("input_image")
                        .short('i')
                        .long("in")
                        .value_name("image source file")
                        .required(true)
                        .help("Stego image that carries the secret message"),
                )
                .arg(
                    Arg::new("exchange_key")
                        .long("exchange-key")
                        .value_name("key file")
                        .required(true)
                        .help("Own secret exchange key, opens the sealed seed"),
                )
                .arg(
                    Arg::new("sender_verify_key")
                        .long("sender-verify-key")
                        .value_name("key file")
                        .required(true)
                        .help("Sender public verifying key, the signature is checked against it"),
                ),
        )
        .subcommand(
            Command::new("eval")
                .about("Scores the distortion between an original image and its stego counterpart")
                .arg(
                    Arg::new("original")
                        .long("original")
                        .value_name("image file")
                        .required(true)
                        .help("The untouched original image"),
                )
                .arg(
                    Arg::new("stego")
                        .long("stego")
                        .value_name("image file")
                        .required(true)
                        .help("The stego image to compare against"),
                ),
        )
}

fn conceal_keyring(m: &ArgMatches) -> Result<MemoryKeyring> {
    let mut ring = MemoryKeyring::new();
    ring.add_recipient(
        "recipient",
        keys::load_recipient(
            Path::new(m.get_one::<String>("recipient_key").unwrap()),
            Path::new(m.get_one::<String>("recipient_verify_key").unwrap()),
        )?,
    );
    ring.add_identity(
        "self",
        keys::load_identity(
            Path::new(m.get_one::<String>("exchange_key").unwrap()),
            Path::new(m.get_one::<String>("signing_key").unwrap()),
        )?,
    );

    Ok(ring)
}

fn print_report(report: &unisteg_core::quality::Report) {
    println!("{:<5} | {:<20} | Lower = Better", "MSE", report.mse);
    println!("{:<5} | {:<20} | Higher = Better", "PSNR", report.psnr);
    println!("{:<5} | {:<20} | Higher = Better", "QI", report.quality_index);

    let h = &report.histogram;
    println!("{:<20} | {}", "Mean Original", h.mean_original);
    println!("{:<20} | {}", "Mean Stego", h.mean_stego);
    println!("{:<20} | {}", "StdDev Original", h.stddev_original);
    println!("{:<20} | {}", "StdDev Stego", h.stddev_stego);
    println!("{:<20} | {:?}", "MinMax Original", h.min_max_original);
    println!("{:<20} | {:?}", "MinMax Stego", h.min_max_stego);
}
