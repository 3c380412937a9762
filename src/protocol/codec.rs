use bytes::{BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::{debug, trace};

use super::packet::StatusPacket;
use super::PACKET_SIZE;
use crate::core::Error;

/// Datagram codec for status packets
///
/// Each buffer handed to `decode` is one whole datagram, the way
/// `tokio_util::udp::UdpFramed` delivers them. A datagram of the wrong
/// length is drained and reported, so the transport can carry on with the
/// next one.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusCodec;

impl StatusCodec {
    /// Creates a new status codec
    pub fn new() -> Self {
        StatusCodec
    }
}

impl Decoder for StatusCodec {
    type Item = StatusPacket;
    type Error = Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.is_empty() {
            return Ok(None);
        }

        let datagram = src.split();
        match StatusPacket::decode(&datagram) {
            Ok(packet) => {
                trace!(ident = packet.ident, counter = packet.counter, "decoded status packet");
                Ok(Some(packet))
            }
            Err(e) => {
                debug!(len = datagram.len(), "dropping malformed status datagram");
                Err(e)
            }
        }
    }
}

impl Encoder<StatusPacket> for StatusCodec {
    type Error = Error;

    fn encode(&mut self, item: StatusPacket, dst: &mut BytesMut) -> Result<(), Self::Error> {
        dst.reserve(PACKET_SIZE);
        dst.put_slice(&item.encode());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::{SinkExt, StreamExt};
    use std::net::SocketAddr;
    use std::time::Duration;
    use tokio::net::UdpSocket;
    use tokio::time::timeout;
    use tokio_util::codec::FramedRead;
    use tokio_util::udp::UdpFramed;

    #[test]
    fn test_codec_status_packet() {
        let mut codec = StatusCodec::new();
        let mut bytes = BytesMut::new();

        let packet = StatusPacket::new(0x02, 0x0203);
        codec.encode(packet, &mut bytes).unwrap();
        assert_eq!(&bytes[..], &[0x02, 0x02, 0x03]);

        let decoded = codec.decode(&mut bytes).unwrap();
        assert_eq!(decoded, Some(packet));
        assert!(bytes.is_empty());
    }

    #[test]
    fn test_codec_empty_buffer() {
        let mut codec = StatusCodec::new();
        let mut bytes = BytesMut::new();
        assert!(codec.decode(&mut bytes).unwrap().is_none());
    }

    #[test]
    fn test_codec_rejects_and_drains() {
        let mut codec = StatusCodec::new();
        let mut bytes = BytesMut::from(&[0x01, 0x02, 0x03, 0x04][..]);

        let err = codec.decode(&mut bytes).unwrap_err();
        assert!(err.is_invalid_length());
        assert!(bytes.is_empty());

        let mut bytes = BytesMut::from(&[0x01, 0x02][..]);
        assert!(codec.decode(&mut bytes).unwrap_err().is_invalid_length());
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_framed_read() {
        let reader = tokio_test::io::Builder::new()
            .read(&[0x01, 0xFF, 0xFE])
            .build();
        let mut frames = FramedRead::new(reader, StatusCodec::new());

        let packet = frames.next().await.unwrap().unwrap();
        assert_eq!(packet, StatusPacket::new(0x01, 0xFFFE));
        assert!(frames.next().await.is_none());
    }

    #[tokio::test]
    async fn test_udp_loopback() {
        let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
        let sender = UdpSocket::bind(addr).await.unwrap();
        let receiver = UdpSocket::bind(addr).await.unwrap();
        let receiver_addr = receiver.local_addr().unwrap();

        // A stray datagram of the wrong size ahead of the real one
        sender.send_to(&[0x02, 0x00], receiver_addr).await.unwrap();

        let mut tx = UdpFramed::new(sender, StatusCodec::new());
        let mut rx = UdpFramed::new(receiver, StatusCodec::new());

        let packet = StatusPacket::new(0x02, 41);
        tx.send((packet, receiver_addr)).await.unwrap();

        let first = timeout(Duration::from_secs(1), rx.next()).await.unwrap().unwrap();
        assert!(first.unwrap_err().is_invalid_length());

        let (received, _) = timeout(Duration::from_secs(1), rx.next())
            .await
            .unwrap()
            .unwrap()
            .unwrap();
        assert_eq!(received, packet);
    }
}
