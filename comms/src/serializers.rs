use crate::error::CommsError;
use crate::messages::{ServiceReply, StringMessage, TransformMessage};
use talker::{ChangeStringRequest, ChangeStringResponse, StampedIsometry, StampedTransform};

/// Serialize a chatter message
pub fn serialize_string(data: &str) -> Result<Vec<u8>, CommsError> {
    Ok(bincode::serialize(&StringMessage {
        data: data.to_string(),
    })?)
}

/// Deserialize a chatter message
pub fn deserialize_string(data: &[u8]) -> Result<String, CommsError> {
    let message: StringMessage = bincode::deserialize(data)?;
    Ok(message.data)
}

/// Serialize a stamped transform
pub fn serialize_transform(transform: &StampedTransform) -> Result<Vec<u8>, CommsError> {
    let message = TransformMessage {
        parent: transform.parent.clone(),
        child: transform.child.clone(),
        stamp_ns: transform.isometry.stamp(),
        translation: transform.isometry.translation(),
        rotation: transform.isometry.rotation(),
    };
    Ok(bincode::serialize(&message)?)
}

/// Deserialize a stamped transform
pub fn deserialize_transform(data: &[u8]) -> Result<StampedTransform, CommsError> {
    let message: TransformMessage = bincode::deserialize(data)?;
    Ok(StampedTransform::new(
        &message.parent,
        &message.child,
        StampedIsometry::new(message.translation, message.rotation, message.stamp_ns),
    ))
}

/// Serialize a change_string request
pub fn serialize_request(request: &ChangeStringRequest) -> Result<Vec<u8>, CommsError> {
    Ok(bincode::serialize(request)?)
}

/// Deserialize a change_string request
pub fn deserialize_request(data: &[u8]) -> Result<ChangeStringRequest, CommsError> {
    Ok(bincode::deserialize(data)?)
}

/// Serialize a change_string reply, either a response or the reason it failed
pub fn serialize_reply(
    reply: &Result<ChangeStringResponse, String>,
) -> Result<Vec<u8>, CommsError> {
    let reply = match reply {
        Ok(response) => ServiceReply::Ok(response.clone()),
        Err(message) => ServiceReply::Err(message.clone()),
    };
    Ok(bincode::serialize(&reply)?)
}

/// Deserialize a change_string reply into Result<ChangeStringResponse, String>
/// Returns Ok(response) on success, or Err(error_message) if the server failed
pub fn deserialize_reply(
    data: &[u8],
) -> Result<Result<ChangeStringResponse, String>, CommsError> {
    let reply: ServiceReply = bincode::deserialize(data)?;
    Ok(match reply {
        ServiceReply::Ok(response) => Ok(response),
        ServiceReply::Err(message) => Err(message),
    })
}
