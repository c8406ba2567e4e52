//! Static OpenAPI document served to API consumers.

use serde_json::{json, Value};

pub fn document() -> Value {
  json!({
    "openapi": "3.0.0",
    "info": {
      "title": "Email Service API",
      "description": "API for sending emails with a fixed sender and recipient",
      "version": "1.0.0"
    },
    "paths": {
      "/send-email": {
        "post": {
          "summary": "Send a custom email",
          "description": "Sends an email with custom subject and message text",
          "requestBody": {
            "required": true,
            "content": {
              "application/json": {
                "schema": {
                  "type": "object",
                  "required": ["subject", "message_text"],
                  "properties": {
                    "subject": {
                      "type": "string",
                      "description": "The email subject line"
                    },
                    "message_text": {
                      "type": "string",
                      "description": "The email body text content"
                    }
                  }
                }
              }
            }
          },
          "responses": {
            "200": {
              "description": "Email sent successfully",
              "content": {
                "application/json": {
                  "schema": {
                    "type": "object",
                    "properties": {
                      "success": {"type": "boolean"},
                      "message": {"type": "string"},
                      "result": {"type": "array", "items": {"type": "object"}}
                    }
                  }
                }
              }
            },
            "400": {
              "description": "Missing fields or the provider rejected the message",
              "content": {
                "application/json": {
                  "schema": {
                    "type": "object",
                    "properties": {
                      "success": {"type": "boolean"},
                      "error": {"type": "string"}
                    }
                  }
                }
              }
            },
            "500": {
              "description": "Missing credential or internal failure",
              "content": {
                "application/json": {
                  "schema": {
                    "type": "object",
                    "properties": {
                      "success": {"type": "boolean"},
                      "error": {"type": "string"}
                    }
                  }
                }
              }
            }
          }
        }
      },
      "/health": {
        "get": {
          "summary": "Health check",
          "responses": {
            "200": {
              "description": "Service is running",
              "content": {
                "application/json": {
                  "schema": {
                    "type": "object",
                    "properties": {
                      "status": {"type": "string"},
                      "message": {"type": "string"}
                    }
                  }
                }
              }
            }
          }
        }
      }
    }
  })
}
