//! In-memory representation of a classic CAN frame as it travels through the
//! routing pipeline, tagged with the physical bus it was seen on.
use embedded_can::{Frame, Id, StandardId};

use crate::error::FrameError;
use crate::infra::codec::fields::FieldReader;

/// Payload capacity of a classic CAN frame.
pub const MAX_FRAME_PAYLOAD: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Frame observed on, or destined for, one of the pipeline's buses.
pub struct BusFrame {
    /// Physical bus the frame belongs to.
    pub bus_id: u8,
    /// Broadcast message identifier.
    pub frame_id: u16,
    /// Payload buffer. Bytes past `len` are don't-care.
    pub data: [u8; MAX_FRAME_PAYLOAD],
    /// Number of valid payload bytes (Data Length Code, 0 to 8).
    pub len: usize,
    /// Forward to the transport layer once the pipeline is done with it.
    pub dispatch: bool,
}

impl BusFrame {
    /// Build a frame from a payload slice. `dispatch` starts cleared.
    pub fn new(bus_id: u8, frame_id: u16, payload: &[u8]) -> Result<Self, FrameError> {
        if payload.len() > MAX_FRAME_PAYLOAD {
            return Err(FrameError::PayloadTooLong { len: payload.len() });
        }
        let mut data = [0u8; MAX_FRAME_PAYLOAD];
        data[..payload.len()].copy_from_slice(payload);
        Ok(Self {
            bus_id,
            frame_id,
            data,
            len: payload.len(),
            dispatch: false,
        })
    }

    /// Full eight-byte frame ready to be forwarded.
    pub const fn outbound(bus_id: u8, frame_id: u16, data: [u8; MAX_FRAME_PAYLOAD]) -> Self {
        Self {
            bus_id,
            frame_id,
            data,
            len: MAX_FRAME_PAYLOAD,
            dispatch: true,
        }
    }

    /// Set the dispatch flag.
    pub fn with_dispatch(mut self, dispatch: bool) -> Self {
        self.dispatch = dispatch;
        self
    }

    /// Valid bytes, clamped to the buffer capacity.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len.min(MAX_FRAME_PAYLOAD)]
    }

    /// Bounded field reader over the valid bytes.
    #[inline]
    pub fn reader(&self) -> FieldReader<'_> {
        FieldReader::new(self.as_slice())
    }

    /// Convert a driver frame received on `bus_id`.
    ///
    /// Extended identifiers are accepted as long as they fit the 16-bit frame
    /// id; remote frames carry nothing to translate and are refused.
    pub fn from_can<F: Frame>(bus_id: u8, frame: &F) -> Result<Self, FrameError> {
        if frame.is_remote_frame() {
            return Err(FrameError::RemoteFrame);
        }
        let frame_id = match frame.id() {
            Id::Standard(id) => id.as_raw(),
            Id::Extended(id) => {
                let raw = id.as_raw();
                u16::try_from(raw).map_err(|_| FrameError::IdentifierOutOfRange { id: raw })?
            }
        };
        Self::new(bus_id, frame_id, frame.data())
    }

    /// Convert into a driver frame with an 11-bit standard identifier.
    pub fn to_can<F: Frame>(&self) -> Result<F, FrameError> {
        let id = StandardId::new(self.frame_id).ok_or(FrameError::InvalidStandardId {
            id: self.frame_id,
        })?;
        F::new(id, self.as_slice()).ok_or(FrameError::DriverRejected)
    }
}
