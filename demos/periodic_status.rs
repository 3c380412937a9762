use futures::{SinkExt, StreamExt};
use spotcomm::{LinkConfig, StatusCodec, StatusPacket};
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tokio::time::interval;
use tokio_util::udp::UdpFramed;
use tracing::{info, warn};

const ROUNDS: usize = 10;

#[tokio::main]
async fn main() -> spotcomm::Result<()> {
    tracing_subscriber::fmt::init();

    let config = LinkConfig::default();
    config.validate()?;

    println!("Starting periodic status exchange:");
    println!("- Node identifier: {:#04x}", config.node.ident());
    println!("- Broadcast period: {:?}", config.broadcast_period);
    println!("- Message type: {:#04x}", config.message_type);

    let addr = SocketAddr::from(([127, 0, 0, 1], 0));
    let sender = UdpSocket::bind(addr).await?;
    let receiver = UdpSocket::bind(addr).await?;
    let receiver_addr = receiver.local_addr()?;

    let mut tx = UdpFramed::new(sender, StatusCodec::new());
    let mut rx = UdpFramed::new(receiver, StatusCodec::new());

    let consumer = tokio::spawn(async move {
        let mut received = 0;
        while received < ROUNDS {
            match rx.next().await {
                Some(Ok((packet, from))) => {
                    received += 1;
                    let row: String = (0..4)
                        .map(|i| if packet.lit(i, 4) { '*' } else { '.' })
                        .collect();
                    info!(
                        %from,
                        kind = ?packet.kind(),
                        counter = packet.counter,
                        indicator = packet.indicator(),
                        %row,
                        "received status packet"
                    );
                }
                Some(Err(e)) => warn!("discarding datagram: {}", e),
                None => break,
            }
        }
    });

    let mut ticker = interval(config.broadcast_period);
    let mut packet = StatusPacket::first(config.node);
    for _ in 0..ROUNDS {
        ticker.tick().await;
        packet = packet.next();
        tx.send((packet, receiver_addr)).await?;
    }

    if let Err(e) = consumer.await {
        warn!("consumer task failed: {}", e);
    }

    println!("\nSent {} status packets", ROUNDS);
    Ok(())
}
