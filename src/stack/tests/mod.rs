mod paired;
